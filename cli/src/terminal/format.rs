use colored::*;

use crate::terminal::colors;

/// Splits a base URL like `http://192.168.1.42:3001` into tree details.
pub fn url_to_details(url: &str) -> Vec<(String, ColoredString)> {
    let authority = url.split_once("://").map_or(url, |(_, rest)| rest);
    let mut details = Vec::new();

    match authority.rsplit_once(':') {
        Some((host, port)) => {
            details.push(("Host".to_string(), host.color(colors::IPV4_ADDR)));
            details.push(("Port".to_string(), port.normal()));
        }
        None => details.push(("Host".to_string(), authority.color(colors::IPV4_ADDR))),
    }

    details.push(("URL".to_string(), url.color(colors::URL)));
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_split_into_host_and_port() {
        let details = url_to_details("http://192.168.1.42:3001");
        let keys: Vec<&str> = details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Host", "Port", "URL"]);
        assert_eq!(details[0].1.input, "192.168.1.42");
        assert_eq!(details[1].1.input, "3001");
    }

    #[test]
    fn url_without_port_only_has_host() {
        let details = url_to_details("http://backend.local");
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].1.input, "backend.local");
    }
}
