use std::fmt::Write as _;
use std::path::Path;

use corpus_types::DecodedCase;

/// Detailed renderer: what a triager needs to reproduce a crash.
///
/// The header line names the corpus entry and its operand width. The
/// expression follows in decimal, then both operands in zero-padded hex
/// at full width, so the hex lines up with the bytes on disk.
///
/// ```text
/// corpus/crash-5f1c [arg_size=32]
///   1 << 2
///   x = 0x0000000000000000000000000000000000000000000000000000000000000001
///   y = 0x0000000000000000000000000000000000000000000000000000000000000002
/// ```
///
/// Without a path the header reads `<input> [arg_size=N]`.
pub struct DetailedRenderer;

impl DetailedRenderer {
    pub fn render(case: &DecodedCase, path: Option<&Path>) -> String {
        let source = path.map_or_else(|| "<input>".to_string(), |p| p.display().to_string());

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{source} [arg_size={}]", case.arg_size().bytes());
        let _ = writeln!(out, "  {} {} {}", case.x, case.operator, case.y);
        let _ = writeln!(out, "  x = {:#x}", case.x);
        let _ = write!(out, "  y = {:#x}", case.y);
        out
    }
}
