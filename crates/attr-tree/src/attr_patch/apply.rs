//! Patch apply logic.

use std::mem;

use attr_pointer::{find, find_parent_mut, find_value, format_json_pointer, is_child, PathError, ReferenceKey};
use attr_value::Attr;

use super::types::{ApplyPatchOptions, Op, PatchError};

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Attr, path: &[String], value: Attr) -> Result<Option<Attr>, PatchError> {
    if path.is_empty() {
        return Ok(Some(mem::replace(doc, value)));
    }
    let (parent, key) = find_parent_mut(doc, path)?;
    match parent {
        Attr::Dict(dic) => Ok(dic.set(key, value)),
        Attr::List(list) => match ReferenceKey::from_list_step(key)? {
            ReferenceKey::Index(i) => {
                if list.insert(i, value) {
                    Ok(None)
                } else {
                    Err(PathError::InvalidIndex.into())
                }
            }
            _ => {
                list.push(value);
                Ok(None)
            }
        },
        _ => Err(PathError::NotAContainer.into()),
    }
}

/// Takes the value at `path` out of its container, returning it with the
/// position it held.
fn detach(doc: &mut Attr, path: &[String]) -> Result<(Attr, usize), PatchError> {
    let (parent, key) = find_parent_mut(doc, path)?;
    let removed = match parent {
        Attr::Dict(dic) => dic.remove_full(key),
        Attr::List(list) => match ReferenceKey::from_list_step(key)? {
            ReferenceKey::Index(i) => list.remove_at(i).map(|value| (i, value)),
            _ => None,
        },
        _ => return Err(PathError::NotAContainer.into()),
    };
    let (position, value) = removed.ok_or(PatchError::Path(PathError::NotFound))?;
    Ok((value, position))
}

/// Puts a value taken by [`detach`] back where it was.
fn reattach(doc: &mut Attr, path: &[String], position: usize, value: Attr) {
    if let Ok((parent, key)) = find_parent_mut(doc, path) {
        match parent {
            Attr::Dict(dic) => {
                dic.insert_at(position, key, value);
            }
            Attr::List(list) => {
                list.insert(position, value);
            }
            _ => {}
        }
    }
}

/// Checks that an `add` at `path` would succeed, without touching `doc`.
fn check_add_target(doc: &Attr, path: &[String]) -> Result<(), PatchError> {
    let target = find(doc, path)?;
    match target.key {
        Some(ReferenceKey::Index(_)) if target.val.is_none() && !target.is_list_end() => {
            Err(PathError::InvalidIndex.into())
        }
        _ => Ok(()),
    }
}

fn apply_remove(doc: &mut Attr, path: &[String]) -> Result<Attr, PatchError> {
    detach(doc, path).map(|(value, _)| value)
}

fn apply_replace(doc: &mut Attr, path: &[String], value: Attr) -> Result<Attr, PatchError> {
    if path.is_empty() {
        return Ok(mem::replace(doc, value));
    }
    let (parent, key) = find_parent_mut(doc, path)?;
    let slot = match parent {
        Attr::Dict(dic) => dic.get_mut(key),
        Attr::List(list) => match ReferenceKey::from_list_step(key)? {
            ReferenceKey::Index(i) => list.get_mut(i),
            _ => None,
        },
        _ => return Err(PathError::NotAContainer.into()),
    };
    let slot = slot.ok_or(PatchError::Path(PathError::NotFound))?;
    Ok(mem::replace(slot, value))
}

fn apply_copy(doc: &mut Attr, path: &[String], from: &[String]) -> Result<Option<Attr>, PatchError> {
    let value = find_value(doc, from)?.clone();
    apply_add(doc, path, value)
}

fn apply_move(doc: &mut Attr, path: &[String], from: &[String]) -> Result<Option<Attr>, PatchError> {
    if from == path {
        find_value(doc, from)?;
        return Ok(None);
    }
    if is_child(from, path) {
        return Err(PatchError::InvalidOp(format!(
            "cannot move {} into its own child {}",
            format_json_pointer(from),
            format_json_pointer(path)
        )));
    }
    let (value, position) = detach(doc, from)?;
    if let Err(error) = check_add_target(doc, path) {
        reattach(doc, from, position, value);
        return Err(error);
    }
    apply_add(doc, path, value)
}

fn apply_test(doc: &Attr, path: &[String], value: &Attr) -> Result<(), PatchError> {
    if find_value(doc, path)? == value {
        Ok(())
    } else {
        Err(PatchError::Test)
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Applies one operation in place.
///
/// Returns the value the operation displaced: the old value for `replace`
/// and `remove`, an overwritten dict entry for `add`, `copy` and `move`.
pub fn apply_op(doc: &mut Attr, op: &Op) -> Result<Option<Attr>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path).map(Some),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()).map(Some),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => apply_test(doc, path, value).map(|()| None),
    }
}

/// Applies `ops` in order, stopping at the first failure.
///
/// Operations before the failing one remain applied.
pub fn apply_ops(doc: &mut Attr, ops: &[Op]) -> Result<(), PatchError> {
    for (index, op) in ops.iter().enumerate() {
        tracing::trace!(
            index,
            op = op.op_name(),
            path = %format_json_pointer(op.path()),
            "applying patch operation"
        );
        if let Err(error) = apply_op(doc, op) {
            tracing::debug!(index, op = op.op_name(), %error, "patch operation failed");
            return Err(error);
        }
    }
    Ok(())
}

/// Applies `ops` according to `options`.
///
/// With `mutate: false` the document is left untouched unless every
/// operation succeeds.
pub fn apply_patch(doc: &mut Attr, ops: &[Op], options: &ApplyPatchOptions) -> Result<(), PatchError> {
    if options.mutate {
        return apply_ops(doc, ops);
    }
    let mut working = doc.clone();
    apply_ops(&mut working, ops)?;
    *doc = working;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
