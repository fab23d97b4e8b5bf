use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod catalog;
pub mod mock;
pub mod remote;

pub use mock::MockClassifier;
pub use remote::HttpClassifier;

/// Maximum accepted upload size (10 MB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// One species classification: the winning label, its confidence, and an
/// optional probability table over related species.
///
/// Serializes to the `/predict` response shape:
/// `{ "class": ..., "confidence": ..., "probabilities": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub label: String,
    /// Model confidence in [0,1].
    pub confidence: f32,
    /// Species name to probability, in the order the model emitted them.
    #[serde(
        default,
        with = "prob_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub probabilities: Option<Vec<(String, f32)>>,
}

/// An image the user selected for analysis. Only metadata is carried here;
/// classifier implementations decide whether they need the file's bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl UploadedImage {
    /// Builds a selection from a file on disk, reading its size from
    /// filesystem metadata and deriving the mime type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path)
            .with_context(|| format!("cannot read file metadata: {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("not a file: {}", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size_bytes: meta.len(),
            mime_type: mime_for_path(path).to_string(),
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Mime type guessed from a file extension. Unknown extensions map to
/// `application/octet-stream`, which the classifiers reject.
pub fn mime_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "bmp" => "image/bmp",
            "txt" => "text/plain",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        },
        None => "application/octet-stream",
    }
}

/// Terminal failure of one classification attempt. Display strings are the
/// exact messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Please upload a valid image file (JPG, PNG, WebP)")]
    InvalidFileType,
    #[error("Image file is too large. Please upload an image smaller than 10MB")]
    FileTooLarge,
    #[error("An unexpected error occurred during pollen analysis")]
    Internal,
    #[error("Network error occurred during pollen analysis")]
    Network,
}

/// A pollen species classifier. The mock and the HTTP-backed implementation
/// are interchangeable behind this trait; callers run `classify` off the UI
/// thread since implementations may block for seconds.
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &UploadedImage) -> Result<Prediction, ClassifyError>;
}

/// Serde adapter keeping `probabilities` a JSON object on the wire while the
/// in-memory form stays an ordered `Vec`. Document order is preserved on
/// deserialization so ties sort in the order the server emitted.
pub(crate) mod prob_map {
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(probs: &Option<Vec<(String, f32)>>, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match probs {
            None => ser.serialize_none(),
            Some(entries) => {
                let mut map = ser.serialize_map(Some(entries.len()))?;
                for (species, p) in entries {
                    map.serialize_entry(species, p)?;
                }
                map.end()
            }
        }
    }

    pub fn deserialize<'de, D>(de: D) -> Result<Option<Vec<(String, f32)>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptVisitor;

        impl<'de> Visitor<'de> for OptVisitor {
            type Value = Option<Vec<(String, f32)>>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an optional map of species name to probability")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D2>(self, de: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                struct MapVisitor;

                impl<'de> Visitor<'de> for MapVisitor {
                    type Value = Vec<(String, f32)>;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("a map of species name to probability")
                    }

                    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                        while let Some((species, p)) = access.next_entry::<String, f32>()? {
                            entries.push((species, p));
                        }
                        Ok(entries)
                    }
                }

                de.deserialize_map(MapVisitor).map(Some)
            }
        }

        de.deserialize_option(OptVisitor)
    }
}
