use bytes::Bytes;

/// A document received from a caller.
///
/// Owned by the run that received it and dropped when that run finishes.
#[derive(Clone)]
pub struct UploadedDocument {
    /// Raw file contents
    bytes: Bytes,
    /// Content type as declared by the uploader
    declared_type: String,
    /// Original file name, for logging only
    file_name: Option<String>,
}

impl UploadedDocument {
    pub fn new(bytes: impl Into<Bytes>, declared_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            declared_type: declared_type.into(),
            file_name: None,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Cheap handle to the contents, for moving into blocking tasks.
    pub fn bytes_shared(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for UploadedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedDocument")
            .field("declared_type", &self.declared_type)
            .field("file_name", &self.file_name)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}
