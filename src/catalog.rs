// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category classifier for listing directories.
//!
//! Both directory views (tutors browsed by students, students browsed by
//! tutors) filter listings through the same keyword taxonomy: a listing
//! belongs to a category when any of its subjects, lower-cased, contains any
//! of the category's trigger substrings. Student listings additionally match
//! on their education level for the school-level categories.
//!
//! The taxonomy is not a partition: a listing may match several categories,
//! and the classifier is only ever asked about one category at a time.

use crate::models::{Client, Tutor};
use serde::{Deserialize, Serialize};

/// Directory filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    All,
    Elementary,
    MiddleSchool,
    HighSchool,
    College,
    MedicalSchool,
    JobApplication,
}

/// Trigger lists for one category.
struct CategoryTriggers {
    /// Case-insensitive substrings matched against each subject
    subjects: &'static [&'static str],
    /// Whether the student's education level is also matched
    education: bool,
}

static ELEMENTARY: CategoryTriggers = CategoryTriggers {
    subjects: &[
        "elementary", "basic", "kindergarten", "grade 1", "grade 2", "grade 3", "grade 4",
        "grade 5",
    ],
    education: true,
};

static MIDDLE_SCHOOL: CategoryTriggers = CategoryTriggers {
    subjects: &["middle", "grade 6", "grade 7", "grade 8", "intermediate"],
    education: true,
};

static HIGH_SCHOOL: CategoryTriggers = CategoryTriggers {
    subjects: &[
        "high school",
        "grade 9",
        "grade 10",
        "grade 11",
        "grade 12",
        "ap ",
        "ib ",
        "sat",
        "act",
        "algebra",
        "geometry",
        "calculus",
        "physics",
        "chemistry",
        "biology",
    ],
    education: true,
};

static COLLEGE: CategoryTriggers = CategoryTriggers {
    subjects: &[
        "college",
        "university",
        "admission",
        "application",
        "essay writing",
        "personal statement",
    ],
    education: true,
};

static MEDICAL_SCHOOL: CategoryTriggers = CategoryTriggers {
    subjects: &[
        "mcat",
        "medical",
        "pre-med",
        "premed",
        "med school",
        "anatomy",
        "physiology",
        "biochemistry",
    ],
    education: true,
};

static JOB_APPLICATION: CategoryTriggers = CategoryTriggers {
    subjects: &[
        "job",
        "career",
        "interview",
        "resume",
        "professional",
        "workplace",
    ],
    education: false,
};

impl Category {
    /// All tabs, in the order the directory views present them.
    pub const TABS: [Category; 7] = [
        Category::All,
        Category::Elementary,
        Category::MiddleSchool,
        Category::HighSchool,
        Category::College,
        Category::MedicalSchool,
        Category::JobApplication,
    ];

    /// Tab label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Elementary => "Elementary School",
            Category::MiddleSchool => "Middle School",
            Category::HighSchool => "High School",
            Category::College => "College",
            Category::MedicalSchool => "Medical School",
            Category::JobApplication => "Job Application",
        }
    }

    fn triggers(&self) -> Option<&'static CategoryTriggers> {
        match self {
            Category::All => None,
            Category::Elementary => Some(&ELEMENTARY),
            Category::MiddleSchool => Some(&MIDDLE_SCHOOL),
            Category::HighSchool => Some(&HIGH_SCHOOL),
            Category::College => Some(&COLLEGE),
            Category::MedicalSchool => Some(&MEDICAL_SCHOOL),
            Category::JobApplication => Some(&JOB_APPLICATION),
        }
    }
}

/// A record the classifier can be asked about.
pub trait Listing {
    fn subjects(&self) -> &[String];

    /// Education level, for records that carry one. Tutors advertise the
    /// levels they teach through their subjects, so only student records
    /// expose this.
    fn education(&self) -> Option<&str> {
        None
    }
}

impl Listing for Tutor {
    fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

impl Listing for Client {
    fn subjects(&self) -> &[String] {
        &self.subjects
    }

    fn education(&self) -> Option<&str> {
        if self.education.is_empty() {
            None
        } else {
            Some(&self.education)
        }
    }
}

/// Decide whether a listing with the given subjects and education level
/// belongs to `category`. Empty subjects and absent education never match a
/// non-`All` category; they never error either.
pub fn matches_parts(category: Category, subjects: &[String], education: Option<&str>) -> bool {
    let triggers = match category.triggers() {
        Some(t) => t,
        None => return true, // Category::All
    };

    let subject_hit = subjects.iter().any(|subject| {
        let subject = subject.to_lowercase();
        triggers.subjects.iter().any(|t| subject.contains(t))
    });
    if subject_hit {
        return true;
    }

    if triggers.education {
        if let Some(education) = education {
            let education = education.to_lowercase();
            return triggers.subjects.iter().any(|t| education.contains(t));
        }
    }

    false
}

/// Decide whether `listing` belongs to `category`.
pub fn matches<L: Listing + ?Sized>(category: Category, listing: &L) -> bool {
    matches_parts(category, listing.subjects(), listing.education())
}

/// Filter a listing slice by category, preserving relative order.
///
/// Lazy: nothing is scanned until the iterator is consumed, and the result is
/// recomputed from scratch on every tab change.
pub fn filter_listings<L: Listing>(
    category: Category,
    listings: &[L],
) -> impl Iterator<Item = &L> {
    listings
        .iter()
        .filter(move |listing| matches(category, *listing))
}
