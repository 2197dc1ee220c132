// Resolve a cursor file to its Windows role

use crate::model::Role;
use crate::model::role::FILENAME_PATTERNS;

use super::descriptor::Descriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifiedBy {
    Descriptor,
    FileName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub role: Role,
    pub by: ClassifiedBy,
}

/// Classify `file_name` (with extension). A descriptor association wins over
/// filename patterns; `None` means the file is unresolved.
pub fn classify(file_name: &str, descriptor: Option<&Descriptor>) -> Option<Classification> {
    if let Some(role) = descriptor.and_then(|d| d.role_for(file_name)) {
        return Some(Classification {
            role,
            by: ClassifiedBy::Descriptor,
        });
    }

    classify_by_file_name(file_name).map(|role| Classification {
        role,
        by: ClassifiedBy::FileName,
    })
}

pub fn classify_by_file_name(file_name: &str) -> Option<Role> {
    let stem = file_stem(file_name).to_lowercase();
    FILENAME_PATTERNS
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| stem.contains(*n)))
        .map(|(role, _)| *role)
}

// Everything before the last dot, unless the name starts with it
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}
