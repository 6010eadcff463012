use crate::{
    courses::{Area, Course, CourseData, Section, TopCourses},
    error::CatalogError,
    marker::{CourseMarker, classify_marker, is_language_course},
};

/// Number of courses shown per section, `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseLimit(u32);

impl CourseLimit {
    pub const MAX: u32 = 10;
    pub const DEFAULT: Self = Self(5);

    pub fn new(limit: u32) -> Result<Self, CatalogError> {
        if limit > Self::MAX {
            return Err(CatalogError::LimitOutOfRange(limit));
        }

        Ok(Self(limit))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for CourseLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for CourseLimit {
    type Error = CatalogError;

    fn try_from(limit: u32) -> Result<Self, Self::Error> {
        Self::new(limit)
    }
}

/// What a reader wants to see. Every variant is hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFilters {
    pub show_language: bool,
    pub show_honors: bool,
    pub show_lab: bool,
    pub show_activity: bool,
    pub limit: CourseLimit,
}

impl DisplayFilters {
    /// Everything visible, capped at `limit`.
    pub fn show_all(limit: CourseLimit) -> Self {
        Self {
            show_language: true,
            show_honors: true,
            show_lab: true,
            show_activity: true,
            limit,
        }
    }

    pub fn excludes(&self, course: &Course) -> bool {
        let marker = classify_marker(&course.course_code);

        (!self.show_language && is_language_course(&course.course_code))
            || (!self.show_honors && marker == CourseMarker::Honors)
            || (!self.show_lab && marker == CourseMarker::Lab)
            || (!self.show_activity && marker == CourseMarker::Activity)
    }
}

/// Drops excluded courses, then keeps at most `limit` per section.
///
/// Expects a ranked tree; order is never changed.
pub fn filter(ranked: &CourseData, filters: &DisplayFilters) -> TopCourses {
    let areas = ranked
        .areas
        .iter()
        .map(|area| Area {
            area: area.area.clone(),
            sections: area
                .sections
                .iter()
                .map(|section| filter_section(section, filters))
                .collect(),
        })
        .collect();

    TopCourses { areas }
}

fn filter_section(section: &Section, filters: &DisplayFilters) -> Section {
    Section {
        section: section.section.clone(),
        courses: section
            .courses
            .iter()
            .filter(|course| !filters.excludes(course))
            .take(filters.limit.get())
            .cloned()
            .collect(),
    }
}
