//! Fully-qualified HIDL names.
//!
//! ```text
//! android.hardware.foo@1.2::IFoo.Callback
//! ^^^^^^^^^^^^^^^^^^^^ ^^^   ^^^^^^^^^^^^
//! package              version  type path (optional)
//! ```

use std::fmt;
use std::str::FromStr;

/// The universal base interface every HIDL interface implicitly extends.
pub const BASE_INTERFACE: &str = "android.hidl.base@1.0::IBase";

/// A package path, a `(major, minor)` version and an optional type path.
///
/// The version is always present and `major >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FqName {
    package: String,
    major: u32,
    minor: u32,
    names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FqNameError {
    #[error("'{0}' is missing an '@MAJOR.MINOR' version")]
    MissingVersion(String),
    #[error("'{0}' has an invalid package path")]
    InvalidPackage(String),
    #[error("'{0}' has an invalid version")]
    InvalidVersion(String),
    #[error("'{0}' has major version 0; major versions start at 1")]
    ZeroMajor(String),
    #[error("'{0}' has an invalid type name")]
    InvalidTypeName(String),
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_version_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FqName {
    /// Parse `PACKAGE(.SUBPACKAGE)*@MAJOR.MINOR(::TYPE(.NESTED)*)?`.
    pub fn parse(text: &str) -> Result<FqName, FqNameError> {
        let (package, rest) = text
            .split_once('@')
            .ok_or_else(|| FqNameError::MissingVersion(text.to_string()))?;

        if package.is_empty() || !package.split('.').all(is_identifier) {
            return Err(FqNameError::InvalidPackage(text.to_string()));
        }

        let (version, type_path) = match rest.split_once("::") {
            Some((version, type_path)) => (version, Some(type_path)),
            None => (rest, None),
        };

        let (major, minor) = version
            .split_once('.')
            .and_then(|(major, minor)| {
                Some((
                    parse_version_component(major)?,
                    parse_version_component(minor)?,
                ))
            })
            .ok_or_else(|| FqNameError::InvalidVersion(text.to_string()))?;

        if major == 0 {
            return Err(FqNameError::ZeroMajor(text.to_string()));
        }

        let names = match type_path {
            Some(path) => {
                let names: Vec<String> = path.split('.').map(str::to_string).collect();
                if !names.iter().all(|n| is_identifier(n)) {
                    return Err(FqNameError::InvalidTypeName(text.to_string()));
                }
                names
            }
            None => Vec::new(),
        };

        Ok(FqName {
            package: package.to_string(),
            major,
            minor,
            names,
        })
    }

    /// The universal base interface, `android.hidl.base@1.0::IBase`.
    pub fn base_interface() -> FqName {
        FqName {
            package: "android.hidl.base".to_string(),
            major: 1,
            minor: 0,
            names: vec!["IBase".to_string()],
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn version(&self) -> (u32, u32) {
        (self.major, self.minor)
    }

    /// Type path segments, outermost first. Empty for a package-only name.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Type path joined with `.`, e.g. `IFoo.Callback`.
    pub fn name(&self) -> String {
        self.names.join(".")
    }

    pub fn is_fully_qualified(&self) -> bool {
        !self.names.is_empty()
    }

    /// This name with the type path removed.
    pub fn package_and_version(&self) -> FqName {
        FqName {
            package: self.package.clone(),
            major: self.major,
            minor: self.minor,
            names: Vec::new(),
        }
    }

    /// Whether `other` names something in the same package and version.
    pub fn in_same_package(&self, other: &FqName) -> bool {
        self.package == other.package && self.major == other.major && self.minor == other.minor
    }

    /// A name one level deeper than this one, e.g. `IFoo` -> `IFoo.Callback`.
    pub fn nested(&self, name: &str) -> FqName {
        let mut nested = self.clone();
        nested.names.push(name.to_string());
        nested
    }

    /// The enclosing type's name, if this name is nested.
    pub fn parent(&self) -> Option<FqName> {
        if self.names.len() < 2 {
            return None;
        }
        let mut parent = self.clone();
        parent.names.pop();
        Some(parent)
    }
}

impl FromStr for FqName {
    type Err = FqNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FqName::parse(s)
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}.{}", self.package, self.major, self.minor)?;
        if !self.names.is_empty() {
            write!(f, "::{}", self.names.join("."))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/fq_name_tests.rs"]
mod tests;
