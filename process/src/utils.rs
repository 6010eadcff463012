use std::fmt::{self, Display, Formatter};

use catalog::TopCourses;

/// Plain-text tree of a filtered catalog.
pub struct Report<'a> {
    pub year: u32,
    pub top_courses: &'a TopCourses,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top courses, {} catalog", self.year)?;

        for area in &self.top_courses.areas {
            writeln!(f, "\n{}", area.area)?;

            for section in &area.sections {
                writeln!(f, "  {}", section.section)?;

                if section.courses.is_empty() {
                    writeln!(f, "    (none)")?;
                }

                for course in &section.courses {
                    writeln!(
                        f,
                        "    {} - {}",
                        course.course_code,
                        format_gpa(course.average_gpa)
                    )?;
                }
            }
        }

        Ok(())
    }
}

pub fn format_gpa(average_gpa: Option<f64>) -> String {
    average_gpa.map_or_else(|| "n/a".to_string(), |gpa| format!("{gpa:.2}"))
}
