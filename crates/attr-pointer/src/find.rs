use attr_value::Attr;

use crate::types::{Reference, ReferenceKey};
use crate::PathError;

/// Descends one step, failing when the step does not exist.
fn step_into<'a>(current: &'a Attr, step: &str) -> Result<&'a Attr, PathError> {
    match ReferenceKey::resolve(current, step)? {
        ReferenceKey::Index(i) => current.at(i).ok_or(PathError::NotFound),
        ReferenceKey::End => Err(PathError::NotFound),
        ReferenceKey::Key(key) => current.get(&key).ok_or(PathError::NotFound),
    }
}

fn step_into_mut<'a>(current: &'a mut Attr, step: &str) -> Result<&'a mut Attr, PathError> {
    match current {
        Attr::List(list) => match ReferenceKey::from_list_step(step)? {
            ReferenceKey::Index(i) => list.get_mut(i).ok_or(PathError::NotFound),
            _ => Err(PathError::NotFound),
        },
        Attr::Dict(dic) => dic.get_mut(step).ok_or(PathError::NotFound),
        _ => Err(PathError::NotAContainer),
    }
}

/// Resolves `path` to a [`Reference`].
///
/// Every step but the last must exist. The last step only has to be a
/// well-formed key for its container; a missing target is reported as
/// `val: None`.
///
/// # Errors
///
/// - [`PathError::NotFound`] when an intermediate step is missing
/// - [`PathError::NotAContainer`] when a step descends into a scalar
/// - [`PathError::InvalidIndex`] when a list step is not a decimal index
///
/// # Example
///
/// ```
/// use attr_pointer::{find, parse_json_pointer, ReferenceKey};
/// use attr_value::Attr;
///
/// let doc = Attr::from(vec![Attr::Int(1), Attr::Int(2)]);
/// let r = find(&doc, &parse_json_pointer("/1")).unwrap();
/// assert_eq!(r.val, Some(&Attr::Int(2)));
/// assert_eq!(r.key, Some(ReferenceKey::Index(1)));
/// ```
pub fn find<'a>(val: &'a Attr, path: &[String]) -> Result<Reference<'a>, PathError> {
    let Some((last, init)) = path.split_last() else {
        return Ok(Reference {
            val: Some(val),
            obj: None,
            key: None,
        });
    };
    let obj = init
        .iter()
        .try_fold(val, |current, step| step_into(current, step))?;
    let key = ReferenceKey::resolve(obj, last)?;
    let target = match &key {
        ReferenceKey::Index(i) => obj.at(*i),
        ReferenceKey::End => None,
        ReferenceKey::Key(k) => obj.get(k),
    };
    Ok(Reference {
        val: target,
        obj: Some(obj),
        key: Some(key),
    })
}

/// Like [`find`], but the target itself must exist.
pub fn find_value<'a>(val: &'a Attr, path: &[String]) -> Result<&'a Attr, PathError> {
    path.iter()
        .try_fold(val, |current, step| step_into(current, step))
}

fn find_mut<'a>(val: &'a mut Attr, path: &[String]) -> Result<&'a mut Attr, PathError> {
    let mut current = val;
    for step in path {
        current = step_into_mut(current, step)?;
    }
    Ok(current)
}

/// Mutable access to the container addressed by all but the last step,
/// returned with that last step.
///
/// # Errors
///
/// [`PathError::NoParent`] for the root path, otherwise as [`find_value`].
pub fn find_parent_mut<'a, 'p>(
    val: &'a mut Attr,
    path: &'p [String],
) -> Result<(&'a mut Attr, &'p str), PathError> {
    let (last, init) = path.split_last().ok_or(PathError::NoParent)?;
    let parent = find_mut(val, init)?;
    Ok((parent, last.as_str()))
}
