use crate::error::ResourceError;
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, instrument};

/// Resources compiled into the binary, by logical name.
const BUNDLED: &[(&str, &str)] = &[("file.txt", include_str!("../resources/file.txt"))];

#[derive(Clone, Debug)]
enum Source {
    Bundled,
    Directory(PathBuf),
}

#[derive(Debug)]
enum Location {
    Bundled(&'static str),
    File(PathBuf),
}

/// Resource files shipped with the program, looked up by logical name.
#[derive(Clone, Debug)]
pub struct Resources {
    source: Source,
}

impl Default for Resources {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Bundled => f.write_str("bundled resources"),
            Source::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

impl Resources {
    /// Resources read from the `root` directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(root.into()),
        }
    }

    /// The resources embedded in the program.
    pub fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    /// Resolve `path` among the resources. The resource must exist.
    fn locate(&self, path: &str) -> Result<Location, ResourceError> {
        let relative = Path::new(path);
        if path.is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(ResourceError::InvalidPath(path.to_owned()));
        }
        match &self.source {
            Source::Bundled => BUNDLED
                .iter()
                .find(|(name, _)| Path::new(name) == relative)
                .map(|&(_, content)| Location::Bundled(content))
                .ok_or_else(|| ResourceError::NotFound(path.to_owned())),
            Source::Directory(root) => {
                let location = root.join(relative);
                if location.exists() {
                    Ok(Location::File(location))
                } else {
                    Err(ResourceError::NotFound(path.to_owned()))
                }
            }
        }
    }

    /// Join the lines of resource `path` that start with `a` and have at least
    /// two characters, separated by `\n`.
    ///
    /// A missing resource is an error. A resource which cannot be read is
    /// logged and gives `None`.
    #[instrument(skip(self), fields(resources = %self))]
    pub fn read_filtered_lines(&self, path: &str) -> Result<Option<String>, ResourceError> {
        let text = match self.locate(path)? {
            Location::Bundled(content) => Cow::Borrowed(content),
            Location::File(location) => match read_text(&location) {
                Ok(text) => Cow::Owned(text),
                Err(e) => {
                    error!(resource = path, error = %e, "cannot read resource");
                    return Ok(None);
                }
            },
        };
        Ok(Some(filtered_lines(&text)))
    }
}

fn is_wanted(line: &str) -> bool {
    line.starts_with('a') && line.chars().count() >= 2
}

/// Read the whole file, replacing invalid UTF-8 sequences.
fn read_text(location: &Path) -> io::Result<String> {
    let mut bytes = Vec::new();
    File::open(location)?.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lines end at `\n`, `\r` or `\r\n`.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
    })
}

fn filtered_lines(text: &str) -> String {
    let matching = lines(text).filter(|line| is_wanted(line)).collect::<Vec<_>>();
    debug!(matching = matching.len(), "filtered resource lines");
    matching.join("\n")
}
