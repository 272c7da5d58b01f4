//! Checked assembly of configuration documents for `config-set` and
//! `config-test`.
//!
//! Every insertion goes through [`attach`], so a child that failed to build
//! fails the whole document. The assembly either yields a complete,
//! well-formed tree or an error with nothing half-built left behind.

mod common;
mod d2;
mod dhcp4;
mod dhcp6;
mod types;

use serde_json::{Map, Value};
use thiserror::Error;

pub use d2::d2_config;
pub use dhcp4::{dhcp4_config, dhcp4_subnet};
pub use dhcp6::{dhcp6_config, dhcp6_subnet};
pub use types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
  #[error("{entity} requires a {field}")]
  MissingField {
    entity: &'static str,
    field: &'static str,
  },
  #[error("cannot attach a keyed value to a non-object node")]
  KeyedAttachToNonObject,
  #[error("cannot append a value to a non-array node")]
  AppendToNonArray,
}

pub type BuildResult<T = Value> = Result<T, BuildError>;

pub fn object() -> Value {
  Value::Object(Map::new())
}

pub fn array() -> Value {
  Value::Array(Vec::new())
}

/// Leaf node from any scalar convertible to JSON.
pub fn leaf(value: impl Into<Value>) -> BuildResult {
  Ok(value.into())
}

pub fn null() -> BuildResult {
  Ok(Value::Null)
}

/// Checked insertion of `child` into `parent`.
///
/// With a key the parent must be an object, without one it must be an
/// array. The child is consumed whether the attach succeeds or not, so an
/// error can never leave it reachable from a partially built tree.
pub fn attach(parent: &mut Value, key: Option<&str>, child: BuildResult) -> BuildResult<()> {
  let child = child?;
  match (parent, key) {
    (Value::Object(map), Some(key)) => {
      map.insert(key.to_string(), child);
      Ok(())
    }
    (Value::Array(items), None) => {
      items.push(child);
      Ok(())
    }
    (_, Some(_)) => Err(BuildError::KeyedAttachToNonObject),
    (_, None) => Err(BuildError::AppendToNonArray),
  }
}

pub(crate) fn require<'a>(
  entity: &'static str,
  field: &'static str,
  value: &'a str,
) -> BuildResult<&'a str> {
  if value.is_empty() {
    Err(BuildError::MissingField { entity, field })
  } else {
    Ok(value)
  }
}

pub(crate) fn nonempty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|s| !s.is_empty())
}

/// Element-wise array assembly. Empty input yields no node at all; the
/// first failing element discards everything built so far.
pub(crate) fn collect_array<T>(
  items: &[T],
  build: impl Fn(&T) -> BuildResult,
) -> BuildResult<Option<Value>> {
  if items.is_empty() {
    return Ok(None);
  }
  let mut node = array();
  for item in items {
    attach(&mut node, None, build(item))?;
  }
  Ok(Some(node))
}

/// Attach an optional section, omitting the key when the section is empty.
pub(crate) fn attach_section(
  parent: &mut Value,
  key: &str,
  section: BuildResult<Option<Value>>,
) -> BuildResult<()> {
  if let Some(node) = section? {
    attach(parent, Some(key), Ok(node))?;
  }
  Ok(())
}

pub(crate) fn string_array(values: &[String]) -> Value {
  Value::Array(values.iter().map(|s| Value::String(s.clone())).collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  #[test]
  fn attach_inserts_scalars_into_objects_and_arrays() {
    let mut doc = object();
    attach(&mut doc, Some("name"), leaf("lan")).unwrap();
    attach(&mut doc, Some("id"), leaf(7)).unwrap();
    attach(&mut doc, Some("persist"), leaf(true)).unwrap();
    attach(&mut doc, Some("gap"), null()).unwrap();
    let mut items = array();
    attach(&mut items, None, leaf("a")).unwrap();
    attach(&mut items, None, leaf("b")).unwrap();
    attach(&mut doc, Some("items"), Ok(items)).unwrap();
    assert_eq!(
      doc,
      json!({
        "name": "lan",
        "id": 7,
        "persist": true,
        "gap": null,
        "items": ["a", "b"]
      })
    );
  }

  #[test]
  fn attach_rejects_scalar_parents() {
    let mut leaf_parent = Value::String("x".to_string());
    assert_eq!(
      attach(&mut leaf_parent, Some("k"), leaf(1)),
      Err(BuildError::KeyedAttachToNonObject)
    );
    assert_eq!(
      attach(&mut leaf_parent, None, leaf(1)),
      Err(BuildError::AppendToNonArray)
    );
  }

  #[test]
  fn attach_rejects_keyed_insert_into_array_and_append_into_object() {
    let mut items = array();
    assert_eq!(
      attach(&mut items, Some("k"), leaf(1)),
      Err(BuildError::KeyedAttachToNonObject)
    );
    let mut doc = object();
    assert_eq!(
      attach(&mut doc, None, leaf(1)),
      Err(BuildError::AppendToNonArray)
    );
  }

  #[test]
  fn failed_child_propagates_and_leaves_parent_untouched() {
    let mut doc = object();
    let failed: BuildResult = Err(BuildError::MissingField {
      entity: "option-data",
      field: "name or code",
    });
    assert!(attach(&mut doc, Some("option-data"), failed).is_err());
    assert_eq!(doc, object());
  }

  #[test]
  fn collect_array_is_all_or_nothing() {
    let built = collect_array(&[1, 2, 3], |n| leaf(*n)).unwrap();
    assert_eq!(built, Some(json!([1, 2, 3])));

    let empty: BuildResult<Option<Value>> = collect_array(&[] as &[i32], |n| leaf(*n));
    assert_eq!(empty.unwrap(), None);

    let failing = collect_array(&[1, 2, 3], |n| {
      if *n == 2 {
        Err(BuildError::MissingField {
          entity: "pool",
          field: "range",
        })
      } else {
        leaf(*n)
      }
    });
    assert!(failing.is_err());
  }
}
