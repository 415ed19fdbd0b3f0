//! User-declared extra field definitions.
//!
//! Extra columns are declared either on the command line
//! (`NAME=numeric:MIN..MAX` / `NAME=values:A,B,C`) or through a YAML file.
//! Declarations are collected into a [`FieldRegistry`] in declaration order
//! and validated before generation starts.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Generation rule for a declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    /// Uniform float in `[min, max]`, rounded to 2 decimal places
    Numeric { min: f64, max: f64 },
    /// Uniform choice from a fixed value list
    Categorical { values: Vec<String> },
}

/// A declared extra column: name plus generation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn numeric(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Numeric { min, max },
        }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Categorical { values },
        }
    }

    /// Reject declarations the generator cannot honor: empty names,
    /// inverted or non-finite numeric bounds, empty value lists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            bail!("Field name cannot be empty");
        }
        match &self.kind {
            FieldKind::Numeric { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    bail!("Field '{}': numeric bounds must be finite", self.name);
                }
                if min > max {
                    bail!(
                        "Field '{}': min {} is greater than max {}",
                        self.name,
                        min,
                        max
                    );
                }
            }
            FieldKind::Categorical { values } => {
                if values.is_empty() {
                    bail!("Field '{}': value list cannot be empty", self.name);
                }
            }
        }
        Ok(())
    }
}

impl FromStr for FieldSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || {
            format!(
                "Invalid field declaration: {}. Expected NAME=numeric:MIN..MAX or NAME=values:A,B,C",
                s
            )
        };

        let (name, rest) = s.split_once('=').ok_or_else(err)?;
        let name = name.trim();
        let (kind, params) = rest.split_once(':').ok_or_else(err)?;

        match kind.trim().to_lowercase().as_str() {
            "numeric" | "num" => {
                let (min, max) = params.split_once("..").ok_or_else(err)?;
                let min: f64 = min.trim().parse().map_err(|_| err())?;
                let max: f64 = max.trim().parse().map_err(|_| err())?;
                Ok(FieldSpec::numeric(name, min, max))
            }
            "values" | "list" => {
                let values: Vec<String> = params
                    .split(',')
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
                Ok(FieldSpec::categorical(name, values))
            }
            _ => Err(err()),
        }
    }
}

/// Ordered collection of declared fields.
///
/// Declaration order is preserved; a later declaration with an already-used
/// name overwrites the earlier field's values in the generated table while
/// the column keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    pub fn push(&mut self, spec: FieldSpec) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    /// Validate every declaration, reporting the first problem found
    pub fn validate(&self) -> anyhow::Result<()> {
        for spec in &self.specs {
            spec.validate()?;
        }
        Ok(())
    }
}

/// YAML field-definition file
///
/// ```yaml
/// fields:
///   - name: Media
///     kind: numeric
///     min: 0
///     max: 10
///   - name: Turma
///     kind: categorical
///     values: [A, B, C]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsFile {
    pub fields: Vec<FieldSpec>,
}

impl FieldsFile {
    /// Load field definitions from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: FieldsFile = serde_yaml::from_str(&content)?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_declaration() {
        let spec = "Media=numeric:0..10".parse::<FieldSpec>().unwrap();
        assert_eq!(spec.name, "Media");
        assert_eq!(spec.kind, FieldKind::Numeric { min: 0.0, max: 10.0 });
    }

    #[test]
    fn test_parse_numeric_negative_and_fractional_bounds() {
        let spec = "Saldo=numeric:-5.5..2.25".parse::<FieldSpec>().unwrap();
        assert_eq!(
            spec.kind,
            FieldKind::Numeric {
                min: -5.5,
                max: 2.25
            }
        );
    }

    #[test]
    fn test_parse_values_declaration() {
        let spec = "Turma=values:A, B ,C".parse::<FieldSpec>().unwrap();
        assert_eq!(spec.name, "Turma");
        assert_eq!(
            spec.kind,
            FieldKind::Categorical {
                values: vec!["A".into(), "B".into(), "C".into()]
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_declarations() {
        assert!("Media".parse::<FieldSpec>().is_err());
        assert!("Media=numeric".parse::<FieldSpec>().is_err());
        assert!("Media=numeric:abc..10".parse::<FieldSpec>().is_err());
        assert!("Media=range:0..10".parse::<FieldSpec>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_specs() {
        assert!(FieldSpec::numeric("", 0.0, 1.0).validate().is_err());
        assert!(FieldSpec::numeric("x", 5.0, 1.0).validate().is_err());
        assert!(FieldSpec::numeric("x", 0.0, f64::NAN).validate().is_err());
        assert!(FieldSpec::categorical("x", vec![]).validate().is_err());

        assert!(FieldSpec::numeric("x", 1.0, 1.0).validate().is_ok());
        assert!(FieldSpec::categorical("x", vec!["a".into()]).validate().is_ok());
    }

    #[test]
    fn test_registry_validates_all_specs() {
        let mut registry = FieldRegistry::new();
        registry.push(FieldSpec::numeric("ok", 0.0, 1.0));
        registry.push(FieldSpec::categorical("bad", vec![]));
        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_parse_yaml_fields() {
        let yaml = r#"
fields:
  - name: Media
    kind: numeric
    min: 0
    max: 10
  - name: Turma
    kind: categorical
    values: [A, B, C]
"#;
        let file: FieldsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.fields.len(), 2);
        assert_eq!(file.fields[0].kind, FieldKind::Numeric { min: 0.0, max: 10.0 });
        assert_eq!(
            file.fields[1].kind,
            FieldKind::Categorical {
                values: vec!["A".into(), "B".into(), "C".into()]
            }
        );
    }
}
