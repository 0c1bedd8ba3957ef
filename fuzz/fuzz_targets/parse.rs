#![no_main]

use libfuzzer_sys::fuzz_target;
use zeru_syntax::ast::Span;
use zeru_syntax::parse_source;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let output = parse_source(s);
        let whole = Span::new(0, s.len());
        assert_eq!(output.program.span, whole);
        for diag in &output.diagnostics {
            assert!(whole.contains(diag.span), "{:?} outside input", diag.span);
        }
        for decl in &output.program.declarations {
            assert!(whole.contains(decl.span), "{:?} outside input", decl.span);
        }
    }
});
