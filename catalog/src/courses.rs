use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_code: String,
    #[serde(rename = "averageGPA", default)]
    pub average_gpa: Option<f64>,
}

impl Course {
    pub fn new(course_code: impl Into<String>, average_gpa: Option<f64>) -> Self {
        Self {
            course_code: course_code.into(),
            average_gpa,
        }
    }

    /// GPA used for ordering. A missing or NaN GPA ranks below every real one.
    pub fn effective_gpa(&self) -> f64 {
        self.average_gpa
            .filter(|gpa| !gpa.is_nan())
            .unwrap_or(f64::NEG_INFINITY)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub section: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub area: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseData {
    pub year: u32,
    pub areas: Vec<Area>,
}

/// Ranked or filtered view of a catalog, without the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCourses {
    pub areas: Vec<Area>,
}

impl From<CourseData> for TopCourses {
    fn from(data: CourseData) -> Self {
        Self { areas: data.areas }
    }
}
