#![no_main]

use dropzone::{
    DragPayload, FILES_MARKER, FileEntry, ItemKind, MatchReason, OPAQUE_FILE_TYPE, PayloadItem,
    match_payload, parse,
};
use libfuzzer_sys::fuzz_target;

// Input layout: one selector byte, then UTF-8 lines. The first line is the
// attribute; each further line is `kind type` (itemized) or a flat type
// string, where `file:<type>` lines go to the files list.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let mut lines = text.lines();
    let pattern = parse(lines.next().unwrap_or(""));

    if selector & 1 == 0 {
        let items: Vec<PayloadItem> = lines
            .map(|line| {
                let (kind, ty) = line.split_once(' ').unwrap_or((line, ""));
                PayloadItem::new(ItemKind::from_platform(kind), ty)
            })
            .collect();
        let result = match_payload(&pattern, &DragPayload::itemized(items.clone()));

        let exact = items.iter().any(|i| pattern.accepts(&i.kind, &i.ty));
        let opaque = pattern.has_file_types()
            && items
                .iter()
                .any(|i| i.kind == ItemKind::File && i.ty == OPAQUE_FILE_TYPE);
        assert_eq!(result.is_some(), exact || opaque);
    } else {
        let mut types = Vec::new();
        let mut files = Vec::new();
        for line in lines {
            match line.strip_prefix("file:") {
                Some(ty) => files.push(FileEntry::new("fuzz", ty)),
                None => types.push(line.to_string()),
            }
        }
        let payload = DragPayload::flat(types.clone(), files.clone());
        let result = match_payload(&pattern, &payload);

        let string_hit = types
            .iter()
            .any(|t| t.contains('/') && pattern.string_types().contains(t.as_str()));
        let file_hit = files
            .iter()
            .any(|f| pattern.file_types().contains(f.ty.as_str()));
        let withheld = types.iter().any(|t| t == FILES_MARKER)
            && files.is_empty()
            && pattern.has_file_types();
        assert_eq!(result.is_some(), string_hit || file_hit || withheld);
        if let Some(hit) = result {
            assert!(hit.reason() != MatchReason::OpaqueFile);
        }
    }
});
