use crate::model::upload::UploadDto;

/// Declared purpose of an uploaded file; decides the MIME allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPurpose {
    PokemonImage,
    PokemonAudio,
}

impl UploadPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PokemonImage => "POKEMON_IMAGE",
            Self::PokemonAudio => "POKEMON_AUDIO",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "POKEMON_IMAGE" => Some(Self::PokemonImage),
            "POKEMON_AUDIO" => Some(Self::PokemonAudio),
            _ => None,
        }
    }

    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            Self::PokemonImage => &["image/jpeg", "image/png", "image/webp", "image/gif"],
            Self::PokemonAudio => &["audio/mpeg", "audio/ogg", "audio/wav"],
        }
    }

    pub fn allows(&self, mime_type: &str) -> bool {
        self.allowed_mime_types().contains(&mime_type)
    }
}

/// Extension for the stored file: taken from the original filename when it
/// has one, otherwise inferred from the MIME type. Includes the leading dot;
/// empty when neither source yields one.
pub fn infer_extension(original_name: &str, mime_type: &str) -> String {
    if let Some((stem, ext)) = original_name.rsplit_once('.') {
        if !stem.is_empty() && !ext.is_empty() && !ext.contains('/') {
            return format!(".{}", ext);
        }
    }

    match mime_type {
        "image/png" => ".png",
        "image/jpeg" => ".jpg",
        "image/webp" => ".webp",
        "image/gif" => ".gif",
        "audio/mpeg" => ".mp3",
        "audio/ogg" => ".ogg",
        "audio/wav" => ".wav",
        _ => "",
    }
    .to_string()
}

/// A file received from the multipart form, fully read into memory.
#[derive(Debug, Clone)]
pub struct ReceivedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A persisted upload: public URL plus the file metadata as received.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub url: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl StoredUpload {
    pub fn into_dto(self) -> UploadDto {
        UploadDto {
            url: self.url,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
        }
    }
}
