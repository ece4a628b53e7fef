#![no_main]

use dropzone::{Token, parse, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(attribute) = std::str::from_utf8(data) else {
        return;
    };

    let pattern = parse(attribute);
    assert_eq!(pattern, parse(attribute));

    let first_op = tokenize(attribute).find_map(|t| match t {
        Token::Operation(op) => Some(op),
        _ => None,
    });
    assert_eq!(pattern.operation(), first_op);

    let has_file = tokenize(attribute).any(|t| matches!(t, Token::Typed { kind: "file", .. }));
    assert_eq!(pattern.has_file_types(), has_file);
    assert_eq!(pattern.has_file_types(), !pattern.file_types().is_empty());
});
