//! `deleteInstance()` call-site rewriting.
//!
//! `obj->deleteInstance();` → `MemoryPoolObject::deleteInstance(obj);`
//! `deleteInstance();`      → `MemoryPoolObject::deleteInstance(this);`
//!
//! Declarations (`void deleteInstance()`), calls that are already static
//! (`X::deleteInstance()`) and friend hooks are left alone. Only the first
//! call-site in a line is considered.

use cs_lexer::{char_offset_to_byte, find_from, owner_span, preceded_by};
use cs_rules::{
    DELETE_INSTANCE_CALL, DELETE_INSTANCE_STATIC, FRIEND_DELETE_INSTANCE, IMPLICIT_RECEIVER,
};

/// Rewrite the first member-style `deleteInstance()` call in `line`.
pub fn rewrite_delete_instance(line: &str) -> String {
    if line.contains(FRIEND_DELETE_INSTANCE) {
        return line.to_string();
    }

    let chars: Vec<char> = line.chars().collect();
    let call: Vec<char> = DELETE_INSTANCE_CALL.chars().collect();
    let Some(call_start) = find_from(&chars, &call, 0) else {
        return line.to_string();
    };
    let call_end = call_start + call.len();

    if preceded_by(&chars, call_start, "::") || preceded_by(&chars, call_start, "void ") {
        return line.to_string();
    }

    let owner = owner_span(&chars, call_start);
    let (replace_start, receiver) = if owner.is_empty() {
        (call_start, IMPLICIT_RECEIVER.to_string())
    } else {
        (owner.start, owner.text(&chars))
    };

    let bs = char_offset_to_byte(&chars, replace_start);
    let be = char_offset_to_byte(&chars, call_end);
    format!(
        "{}{}({}){}",
        &line[..bs],
        DELETE_INSTANCE_STATIC,
        receiver,
        &line[be..]
    )
}
