//! Name and per-dimension labels shared by every array backend.

use super::ArrayError;

/// Array name plus one label per dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayMetadata {
  name: String,
  labels: Vec<String>,
}

fn strip_line_breaks(s: &str) -> String {
  s.chars().filter(|&c| c != '\r' && c != '\n').collect()
}

impl ArrayMetadata {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn set_name(&mut self, name: &str) {
    self.name = strip_line_breaks(name);
  }

  /// Drop all labels and allocate `dimensions` empty ones.
  pub fn reset_labels(&mut self, dimensions: usize) {
    self.labels.clear();
    self.labels.resize(dimensions, String::new());
  }

  pub fn label(&self, i: usize) -> &str {
    match self.labels.get(i) {
      Some(label) => label,
      None => {
        log::error!(
          "dimension label index {} out of range [0, {})",
          i,
          self.labels.len()
        );
        ""
      }
    }
  }

  pub fn set_label(&mut self, i: usize, label: &str) -> Result<(), ArrayError> {
    let dimensions = self.labels.len();
    match self.labels.get_mut(i) {
      Some(slot) => {
        *slot = strip_line_breaks(label);
        Ok(())
      }
      None => {
        let err = ArrayError::DimensionOutOfRange {
          index: i,
          dimensions,
        };
        log::error!("set_dimension_label: {}", err);
        Err(err)
      }
    }
  }
}
