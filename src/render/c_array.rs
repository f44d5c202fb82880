//! C-style array literal rendering.

/// Braced initializer fragment: `{ 0x0A, 0xFF }`.
///
/// An empty sequence yields `{ }`, a valid empty initializer, never an
/// error.
pub fn braced_literal(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "{ }".to_string();
    }
    let values: Vec<String> = bytes.iter().map(|b| format!("0x{b:02X}")).collect();
    format!("{{ {} }}", values.join(", "))
}

/// Full array declaration: `<decl> <name>[<len>] = { ... };`.
///
/// `decl` supplies the storage-class and type tokens, so the same function
/// serves a firmware declaration (`static const PROGMEM u1_t`) and any other
/// declaration style a caller needs.
pub fn array_declaration(decl: &str, name: &str, bytes: &[u8]) -> String {
    format!("{decl} {name}[{}] = {};", bytes.len(), braced_literal(bytes))
}
