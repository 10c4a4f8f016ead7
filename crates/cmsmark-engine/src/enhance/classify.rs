use url::Url;

use super::types::Card;
use crate::parsing::url::normalize_url;

pub const IMAGE_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".avif", ".svg"];
pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".ogg", ".mov"];

/// Classifies one matched URL string into a card.
///
/// Priority: YouTube, Vimeo, image file, video file, generic link. A string
/// that does not parse even after normalization becomes a link card carrying
/// the raw match.
pub fn classify(raw: &str) -> Card {
    let href = normalize_url(raw);
    let Ok(parsed) = Url::parse(&href) else {
        log::debug!("unparseable url {raw:?}; degrading to raw link card");
        return Card::LinkCard {
            url: raw.to_string(),
            domain: raw.to_string(),
        };
    };
    let host = parsed.host_str().unwrap_or_default();

    if let Some(video_id) = youtube_id(&parsed, host) {
        return Card::YouTubeEmbed { video_id };
    }
    if let Some(video_id) = vimeo_id(&parsed, host) {
        return Card::VimeoEmbed { video_id };
    }
    if path_has_extension(&parsed, &IMAGE_EXTENSIONS) {
        return Card::ImageCard { url: href };
    }
    if path_has_extension(&parsed, &VIDEO_EXTENSIONS) {
        return Card::VideoCard { url: href };
    }
    Card::LinkCard {
        domain: strip_www(host).to_string(),
        url: href,
    }
}

/// Host of `url` without a leading `www.`; the input itself when it does not
/// parse.
pub fn domain_of(url: &str) -> String {
    match Url::parse(&normalize_url(url)) {
        Ok(parsed) => strip_www(parsed.host_str().unwrap_or_default()).to_string(),
        Err(_) => url.to_string(),
    }
}

fn youtube_id(url: &Url, host: &str) -> Option<String> {
    let id = if host.contains("youtube.com") {
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
    } else if host.contains("youtu.be") {
        first_segment(url).map(str::to_string)
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

fn vimeo_id(url: &Url, host: &str) -> Option<String> {
    if !host.contains("vimeo.com") {
        return None;
    }
    first_segment(url)
        .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
}

fn first_segment(url: &Url) -> Option<&str> {
    url.path_segments()?.find(|s| !s.is_empty())
}

fn path_has_extension(url: &Url, extensions: &[&str]) -> bool {
    let path = url.path().to_ascii_lowercase();
    extensions.iter().any(|ext| path.ends_with(ext))
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
