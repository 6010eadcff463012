use crate::courses::{Course, CourseData};

/// Copy of `data` with every section ordered by average GPA, best first.
///
/// Courses without a GPA sink to the bottom. Ties keep their original order,
/// and areas and sections are left where they were.
pub fn rank(data: &CourseData) -> CourseData {
    let mut ranked = data.clone();

    for section in ranked
        .areas
        .iter_mut()
        .flat_map(|area| area.sections.iter_mut())
    {
        rank_courses(&mut section.courses);
    }

    ranked
}

pub fn rank_courses(courses: &mut [Course]) {
    // sort_by is stable
    courses.sort_by(|a, b| b.effective_gpa().total_cmp(&a.effective_gpa()));
}
