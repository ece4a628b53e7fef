use crate::transfer::DataTransfer;
use dom::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "dragenter",
            Self::Over => "dragover",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }
}

/// A drag event in flight, dispatched at `target` and bubbling to the root.
#[derive(Clone, Debug)]
pub struct DragEvent {
    kind: DragEventKind,
    target: Id,
    data_transfer: DataTransfer,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DragEvent {
    pub fn new(kind: DragEventKind, target: Id, data_transfer: DataTransfer) -> Self {
        Self {
            kind,
            target,
            data_transfer,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn kind(&self) -> DragEventKind {
        self.kind
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn data_transfer(&self) -> &DataTransfer {
        &self.data_transfer
    }

    pub fn data_transfer_mut(&mut self) -> &mut DataTransfer {
        &mut self.data_transfer
    }

    /// Cancels the platform's default action, which for drag-enter and
    /// drag-over marks the current element as a valid drop target.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
