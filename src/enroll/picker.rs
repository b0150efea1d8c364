//! Course picker of the demo form.

use crate::models::Course;

/// Courses offered by the picker for `query`.
///
/// Already selected courses are left out. An empty query lists the rest in
/// order; otherwise title prefix matches come first, then titles that merely
/// contain the query.
pub fn pick_courses<'a>(courses: &'a [Course], selected: &[u64], query: &str) -> Vec<&'a Course> {
    let needle = query.trim().to_lowercase();
    let candidates = courses.iter().filter(|c| !selected.contains(&c.id));

    if needle.is_empty() {
        return candidates.collect();
    }

    let (mut starts, mut contains) = (Vec::new(), Vec::new());
    for course in candidates {
        let title = course.title.to_lowercase();
        if title.starts_with(&needle) {
            starts.push(course);
        } else if title.contains(&needle) {
            contains.push(course);
        }
    }
    starts.append(&mut contains);
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<Course> {
        ["Advanced Python", "Python Basics", "Rust", "Python for Data"]
            .iter()
            .enumerate()
            .map(|(i, title)| Course {
                id: i as u64 + 1,
                title: title.to_string(),
                ..Course::default()
            })
            .collect()
    }

    fn ids(picked: &[&Course]) -> Vec<u64> {
        picked.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_prefix_before_substring() {
        let all = courses();
        assert_eq!(ids(&pick_courses(&all, &[], "python")), vec![2, 4, 1]);
    }

    #[test]
    fn test_excludes_selected() {
        let all = courses();
        assert_eq!(ids(&pick_courses(&all, &[2], "python")), vec![4, 1]);
        assert_eq!(ids(&pick_courses(&all, &[1, 3], "")), vec![2, 4]);
    }

    #[test]
    fn test_no_match() {
        let all = courses();
        assert!(pick_courses(&all, &[], "golang").is_empty());
    }
}
