//! Program source references collected from the command line

/// Program files given with `-f` (or `-W exec`), in command-line order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramFiles {
    primary: Option<String>,
    rest: Vec<String>,
}

impl ProgramFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first file becomes the primary reference; later ones are appended
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.primary.is_none() {
            self.primary = Some(name);
        } else {
            self.rest.push(name);
        }
    }

    /// The first program file, if any
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Files after the primary one
    pub fn rest(&self) -> &[String] {
        &self.rest
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    pub fn len(&self) -> usize {
        self.primary.iter().count() + self.rest.len()
    }

    /// All files, primary first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.rest.iter())
            .map(String::as_str)
    }
}

/// Where the program text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSource {
    /// One or more program files
    Files(ProgramFiles),
    /// Program text given directly on the command line
    Inline(String),
}

impl ProgramSource {
    pub fn files(&self) -> Option<&ProgramFiles> {
        match self {
            ProgramSource::Files(files) => Some(files),
            ProgramSource::Inline(_) => None,
        }
    }

    pub fn inline_text(&self) -> Option<&str> {
        match self {
            ProgramSource::Files(_) => None,
            ProgramSource::Inline(text) => Some(text),
        }
    }
}
