use std::path::Path;

use url::{form_urlencoded, Url};

/// Serializes a flat string mapping as a `application/x-www-form-urlencoded` query string.
pub(crate) fn object_to_query_params<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

pub(crate) fn file_url_with_query<'a, I>(path: &Path, params: I) -> Result<Url, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut url = Url::from_file_path(path)
        .map_err(|_| format!("Packaged asset path is not absolute: {}", path.display()))?;
    let query = object_to_query_params(params);
    url.set_query((!query.is_empty()).then_some(query.as_str()));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_to_query_params_encodes_reserved_characters() {
        assert_eq!(
            object_to_query_params([("title", "A&B=c d/é?")]),
            "title=A%26B%3Dc+d%2F%C3%A9%3F"
        );
    }

    #[test]
    fn object_to_query_params_joins_pairs_in_order() {
        assert_eq!(
            object_to_query_params([("title", "X"), ("theme", "dark")]),
            "title=X&theme=dark"
        );
        assert_eq!(object_to_query_params(std::iter::empty()), "");
    }

    #[cfg(unix)]
    #[test]
    fn file_url_with_query_appends_encoded_params() {
        let url = file_url_with_query(
            Path::new("/opt/cherry/resources/minapp.html"),
            [("title", "Google Login")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "file:///opt/cherry/resources/minapp.html?title=Google+Login"
        );
        let title = url
            .query_pairs()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value.into_owned());
        assert_eq!(title.as_deref(), Some("Google Login"));
    }

    #[test]
    fn file_url_with_query_rejects_relative_paths() {
        assert!(file_url_with_query(Path::new("resources/minapp.html"), [("title", "X")]).is_err());
    }
}
