use bytes::Bytes;
use url::Url;

/// Where an image to recognize comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Url(Url),
    Upload(Bytes),
}

impl ImageSource {
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Url(url) => url.to_string(),
            ImageSource::Upload(data) => format!("upload ({} bytes)", data.len()),
        }
    }
}
