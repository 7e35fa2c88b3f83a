pub const SEPARATOR: char = '/';

pub trait CollapseSeparators {
    /// Replace every run of separators with a single one, and remove
    /// the trailing separator unless the result is the root.
    fn collapse_separators(&self) -> String;
}

impl CollapseSeparators for str {
    fn collapse_separators(&self) -> String {
        let mut result = String::with_capacity(self.len());
        let mut last_was_separator = false;
        for c in self.chars() {
            if c == SEPARATOR {
                if last_was_separator {
                    continue;
                }
                last_was_separator = true;
            } else {
                last_was_separator = false;
            }
            result.push(c);
        }

        if result.len() > 1 && result.ends_with(SEPARATOR) {
            result.pop();
        }
        result
    }
}

/// Length of the run of separators at the start of `s`
pub fn leading_separators(s: &str) -> usize {
    s.chars().take_while(|c| *c == SEPARATOR).count()
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!("", "".collapse_separators());
    }

    #[test]
    fn test_root() {
        assert_eq!("/", "/".collapse_separators());
        assert_eq!("/", "////".collapse_separators());
    }

    #[test]
    fn test_inner_runs() {
        assert_eq!("a/b/c", "a//b///c".collapse_separators());
        assert_eq!("/a/b", "//a/b".collapse_separators());
    }

    #[test]
    fn test_trailing() {
        assert_eq!("a/b", "a/b/".collapse_separators());
        assert_eq!("a", "a///".collapse_separators());
    }

    #[test]
    fn test_leading_separators() {
        assert_eq!(0, leading_separators("abc"));
        assert_eq!(1, leading_separators("/abc"));
        assert_eq!(3, leading_separators("///b/"));
        assert_eq!(2, leading_separators("//"));
    }
}
