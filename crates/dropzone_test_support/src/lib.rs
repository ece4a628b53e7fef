//! Drag scenario corpus shared by the integration tests.
//!
//! Scenarios live in `fixtures/scenarios.toml`. Each one names a dropzone
//! attribute, the data a drag source offers, the platform exposure under
//! which the target sees it, and the expected outcome.

use dom::{Id, Node, assign_node_ids};
use drag_core::{DataTransfer, PayloadExposure};
use dropzone::{FileEntry, MatchReason, Operation};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCENARIOS_FORMAT_V1: &str = "dropzone-scenarios-v1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub id: String,
    pub attribute_name: String,
    pub attribute: String,
    pub exposure: PayloadExposure,
    pub strings: Vec<String>,
    pub files: Vec<FileEntry>,
    pub expected: Expected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expected {
    pub accepted: bool,
    /// Drop effect written on drag-over; only set for accepted scenarios.
    pub drop_effect: Option<Operation>,
    pub reason: Option<MatchReason>,
}

/// A page holding one dropzone element with a child to aim events at.
pub struct ScenarioPage {
    pub dom: Node,
    pub dropzone: Id,
    pub target: Id,
}

impl Scenario {
    /// Data as the drag source offered it, exposed per `self.exposure`.
    pub fn data_transfer(&self) -> DataTransfer {
        let mut dt = DataTransfer::new(self.exposure);
        for ty in &self.strings {
            dt.set_data(ty.as_str(), format!("{} payload", self.id));
        }
        for file in &self.files {
            dt.add_file(file.clone());
        }
        dt
    }

    /// `document > body > div[attribute] > span`, with ids assigned.
    pub fn page(&self) -> ScenarioPage {
        let mut dom = Node::document(vec![Node::element(
            "body",
            Vec::new(),
            vec![Node::element(
                "div",
                vec![(self.attribute_name.clone(), Some(self.attribute.clone()))],
                vec![Node::element("span", Vec::new(), vec![Node::text("drop here")])],
            )],
        )]);
        assign_node_ids(&mut dom);

        let dropzone = dom.children()[0].children()[0].id();
        let target = dom.children()[0].children()[0].children()[0].id();
        ScenarioPage {
            dom,
            dropzone,
            target,
        }
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn load_default_scenarios() -> Vec<Scenario> {
    load_scenarios(&fixtures_dir().join("scenarios.toml"))
}

#[derive(Debug, Deserialize)]
struct ScenarioManifest {
    format: String,
    scenarios: Vec<RawScenario>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScenario {
    id: String,
    #[serde(default = "default_attribute_name")]
    attribute_name: String,
    attribute: String,
    exposure: String,
    #[serde(default)]
    strings: Vec<String>,
    #[serde(default)]
    files: Vec<RawFile>,
    accepted: bool,
    #[serde(default)]
    drop_effect: Option<String>,
    #[serde(default)]
    reason: Option<RawReason>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawReason {
    StringType,
    FileType,
    OpaqueFile,
    WithheldFiles,
}

impl From<RawReason> for MatchReason {
    fn from(raw: RawReason) -> Self {
        match raw {
            RawReason::StringType => MatchReason::StringType,
            RawReason::FileType => MatchReason::FileType,
            RawReason::OpaqueFile => MatchReason::OpaqueFile,
            RawReason::WithheldFiles => MatchReason::WithheldFiles,
        }
    }
}

fn default_attribute_name() -> String {
    drag_core::DROPZONE_ATTRIBUTE.to_string()
}

pub fn load_scenarios(path: &Path) -> Vec<Scenario> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario manifest {path:?}: {err}"));
    let manifest: ScenarioManifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario manifest {path:?}: {err}"));
    assert_eq!(
        manifest.format, SCENARIOS_FORMAT_V1,
        "unsupported scenario manifest format in {path:?}"
    );

    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(manifest.scenarios.len());
    for raw in manifest.scenarios {
        assert!(
            seen.insert(raw.id.clone()),
            "duplicate scenario id '{}' in {path:?}",
            raw.id
        );
        out.push(validate(raw, path));
    }
    assert!(!out.is_empty(), "scenario manifest {path:?} is empty");
    out
}

fn validate(raw: RawScenario, path: &Path) -> Scenario {
    let id = raw.id;
    let exposure = PayloadExposure::from_label(&raw.exposure).unwrap_or_else(|| {
        panic!(
            "unsupported exposure '{}' for '{id}' in {path:?}",
            raw.exposure
        )
    });
    let drop_effect = raw.drop_effect.as_deref().map(|s| {
        s.parse::<Operation>()
            .unwrap_or_else(|err| panic!("scenario '{id}' in {path:?}: {err}"))
    });

    if raw.accepted {
        assert!(
            drop_effect.is_some() && raw.reason.is_some(),
            "accepted scenario '{id}' needs drop_effect and reason in {path:?}"
        );
    } else {
        assert!(
            drop_effect.is_none() && raw.reason.is_none(),
            "rejected scenario '{id}' must not set drop_effect or reason in {path:?}"
        );
    }

    Scenario {
        attribute_name: raw.attribute_name,
        attribute: raw.attribute,
        exposure,
        strings: raw.strings,
        files: raw
            .files
            .into_iter()
            .map(|f| FileEntry::new(f.name, f.ty))
            .collect(),
        expected: Expected {
            accepted: raw.accepted,
            drop_effect,
            reason: raw.reason.map(MatchReason::from),
        },
        id,
    }
}
