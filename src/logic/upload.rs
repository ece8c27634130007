//! Upload input parsing
//!
//! Terminals report a drag-and-drop of files as pasted text: one or more
//! paths, shell-quoted or escaped, sometimes as `file://` URIs. Only the file
//! name of each path is kept.
//!
//! A line that starts with a Windows path (`C:\...` or `\\server\...`) is
//! split without backslash escapes, since there the backslash separates
//! directories.

/// Split pasted text into file names
///
/// # Examples
/// ```
/// use homefiles::logic::upload::parse_dropped_paths;
///
/// assert_eq!(parse_dropped_paths("/home/me/a.jpg"), vec!["a.jpg"]);
/// assert_eq!(
///     parse_dropped_paths("'/tmp/my photo.jpg' /tmp/b.png"),
///     vec!["my photo.jpg", "b.png"]
/// );
/// assert_eq!(
///     parse_dropped_paths("file:///tmp/summer%20trip.mov"),
///     vec!["summer trip.mov"]
/// );
/// ```
pub fn parse_dropped_paths(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| split_shell_words(line, !starts_with_windows_path(line)))
        .filter_map(|token| file_name(&decode_file_uri(&token)))
        .collect()
}

/// Whether the first word of a line is a drive-letter or UNC path
fn starts_with_windows_path(line: &str) -> bool {
    let word = line.trim_start().trim_start_matches(['"', '\'']);
    let bytes = word.as_bytes();
    match bytes {
        [drive, b':', b'\\', ..] => drive.is_ascii_alphabetic(),
        [b'\\', b'\\', ..] => true,
        _ => false,
    }
}

/// Split one line on unquoted whitespace, honouring '...' and "..."
///
/// With `escapes`, a backslash takes the next character literally.
fn split_shell_words(line: &str, escapes: bool) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '"' => {
                in_word = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' if escapes && chars.peek() == Some(&'"') => {
                            if let Some(escaped) = chars.next() {
                                current.push(escaped);
                            }
                        }
                        _ => current.push(q),
                    }
                }
            }
            '\\' if escapes => {
                in_word = true;
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

/// Turn `file://host/path%20x` into `/path x`; other tokens pass through
fn decode_file_uri(token: &str) -> String {
    let Some(rest) = token.strip_prefix("file://") else {
        return token.to_string();
    };

    // Skip the (usually empty) host part
    let path = match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => rest,
    };

    match urlencoding::decode(path) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => path.to_string(),
    }
}

/// Final path component, ignoring trailing separators
fn file_name(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches(['/', '\\']);
    let name = trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed)
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(parse_dropped_paths("a.txt b.txt"), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_one_path_per_line() {
        let text = "/home/me/one.jpg\n/home/me/two.jpg\n";
        assert_eq!(parse_dropped_paths(text), vec!["one.jpg", "two.jpg"]);
    }

    #[test]
    fn test_backslash_escaped_spaces() {
        assert_eq!(
            parse_dropped_paths("/home/me/family\\ trip.mov"),
            vec!["family trip.mov"]
        );
    }

    #[test]
    fn test_double_quoted_path() {
        assert_eq!(
            parse_dropped_paths("\"/srv/media/Big Report.pdf\""),
            vec!["Big Report.pdf"]
        );
    }

    #[test]
    fn test_windows_paths_keep_their_separators() {
        assert_eq!(parse_dropped_paths("C:\\Users\\me\\a.jpg"), vec!["a.jpg"]);
        assert_eq!(
            parse_dropped_paths("\"D:\\Photos\\beach day.png\" C:\\tmp\\b.txt"),
            vec!["beach day.png", "b.txt"]
        );
        assert_eq!(
            parse_dropped_paths("\\\\nas\\share\\report.pdf"),
            vec!["report.pdf"]
        );
    }

    #[test]
    fn test_escaped_parentheses_on_unix_paths() {
        assert_eq!(
            parse_dropped_paths("/Users/me/photo\\ \\(1\\).jpg"),
            vec!["photo (1).jpg"]
        );
    }

    #[test]
    fn test_file_uri_with_host() {
        assert_eq!(
            parse_dropped_paths("file://localhost/srv/a%2Bb.txt"),
            vec!["a+b.txt"]
        );
    }

    #[test]
    fn test_directory_with_trailing_slash_keeps_its_name() {
        assert_eq!(parse_dropped_paths("/srv/photos/"), vec!["photos"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(parse_dropped_paths("a.txt a.txt"), vec!["a.txt", "a.txt"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_dropped_paths("").is_empty());
        assert!(parse_dropped_paths("   \n\t").is_empty());
        assert!(parse_dropped_paths("/").is_empty());
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(parse_dropped_paths("/docs/Отчет_2024.pdf"), vec!["Отчет_2024.pdf"]);
    }
}
