use std::collections::HashSet;

use thiserror::Error;

use crate::courses::CourseData;

/// Shape problems in a loaded catalog. Reported, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("Area #{index} has an empty label")]
    EmptyAreaLabel { index: usize },

    #[error("{area}: section #{index} has an empty label")]
    EmptySectionLabel { area: String, index: usize },

    #[error("{area}/{section}: course #{index} has an empty course code")]
    EmptyCourseCode {
        area: String,
        section: String,
        index: usize,
    },

    #[error("{area}/{section}: duplicate course code {course_code}")]
    DuplicateCourseCode {
        area: String,
        section: String,
        course_code: String,
    },
}

pub fn validate(data: &CourseData) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for (area_index, area) in data.areas.iter().enumerate() {
        if area.area.trim().is_empty() {
            issues.push(CatalogIssue::EmptyAreaLabel { index: area_index });
        }

        for (section_index, section) in area.sections.iter().enumerate() {
            if section.section.trim().is_empty() {
                issues.push(CatalogIssue::EmptySectionLabel {
                    area: area.area.clone(),
                    index: section_index,
                });
            }

            let mut seen = HashSet::new();

            for (course_index, course) in section.courses.iter().enumerate() {
                if course.course_code.trim().is_empty() {
                    issues.push(CatalogIssue::EmptyCourseCode {
                        area: area.area.clone(),
                        section: section.section.clone(),
                        index: course_index,
                    });
                } else if !seen.insert(course.course_code.as_str()) {
                    issues.push(CatalogIssue::DuplicateCourseCode {
                        area: area.area.clone(),
                        section: section.section.clone(),
                        course_code: course.course_code.clone(),
                    });
                }
            }
        }
    }

    issues
}
