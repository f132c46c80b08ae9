//! Subjects, levels and per-subject tables.
//!
//! The subject set is closed: every student carries one ranking score per
//! subject and every teacher one qualification signal per subject. The
//! enumeration order of [`Subject::ALL`] fixes bucket order and therefore
//! the order in which sections are created.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// A course subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    English,
    Math,
    Asl,
}

impl Subject {
    /// All subjects in scheduling order.
    pub const ALL: [Subject; 3] = [Subject::English, Subject::Math, Subject::Asl];

    /// Lowercase key used in records and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::English => "english",
            Subject::Math => "math",
            Subject::Asl => "asl",
        }
    }

    /// Capitalized name for display ("Math", "Asl").
    pub fn title(self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Math => "Math",
            Subject::Asl => "Asl",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = ScheduleError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == key)
            .ok_or_else(|| ScheduleError::UnknownSubject(s.to_string()))
    }
}

/// Placement level within a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Derives the level from a ranking score.
    ///
    /// `score <= 3` → Beginner, `score > 6` → Advanced, otherwise Intermediate.
    pub fn from_score(score: i32) -> Self {
        if score <= 3 {
            Level::Beginner
        } else if score > 6 {
            Level::Advanced
        } else {
            Level::Intermediate
        }
    }

    /// Numeric level (0, 1, 2).
    pub fn index(self) -> u8 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per subject.
///
/// Missing subjects deserialize to `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct SubjectTable<T> {
    pub english: T,
    pub math: T,
    pub asl: T,
}

impl<T> SubjectTable<T> {
    /// Builds a table by evaluating `f` for every subject.
    pub fn from_fn(mut f: impl FnMut(Subject) -> T) -> Self {
        Self {
            english: f(Subject::English),
            math: f(Subject::Math),
            asl: f(Subject::Asl),
        }
    }

    pub fn get(&self, subject: Subject) -> &T {
        match subject {
            Subject::English => &self.english,
            Subject::Math => &self.math,
            Subject::Asl => &self.asl,
        }
    }

    pub fn get_mut(&mut self, subject: Subject) -> &mut T {
        match subject {
            Subject::English => &mut self.english,
            Subject::Math => &mut self.math,
            Subject::Asl => &mut self.asl,
        }
    }

    pub fn set(&mut self, subject: Subject, value: T) {
        *self.get_mut(subject) = value;
    }

    /// Iterates in [`Subject::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, &T)> {
        Subject::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        for score in 0..=10 {
            let expected = if score <= 3 {
                0
            } else if score > 6 {
                2
            } else {
                1
            };
            assert_eq!(Level::from_score(score).index(), expected, "score {score}");
        }
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(Level::from_score(3), Level::Beginner);
        assert_eq!(Level::from_score(4), Level::Intermediate);
        assert_eq!(Level::from_score(6), Level::Intermediate);
        assert_eq!(Level::from_score(7), Level::Advanced);
        assert_eq!(Level::from_score(-2), Level::Beginner);
    }

    #[test]
    fn test_subject_parse() {
        assert_eq!("Math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!(" ASL ".parse::<Subject>().unwrap(), Subject::Asl);
        assert!(matches!(
            "history".parse::<Subject>(),
            Err(ScheduleError::UnknownSubject(_))
        ));
    }

    #[test]
    fn test_table_access() {
        let mut table = SubjectTable::from_fn(|s| s.as_str().len());
        assert_eq!(*table.get(Subject::English), 7);
        table.set(Subject::Math, 42);
        assert_eq!(table.math, 42);

        let order: Vec<Subject> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(order, Subject::ALL.to_vec());
    }

    #[test]
    fn test_table_missing_entries_default() {
        let table: SubjectTable<i32> = serde_json::from_str(r#"{"math": 8}"#).unwrap();
        assert_eq!(table.math, 8);
        assert_eq!(table.english, 0);
        assert_eq!(table.asl, 0);
    }
}
