//! Conversion between the two spellings of a sysctl key.
//!
//! `net.ipv4.ip_forward` and `net/ipv4/ip_forward` name the same setting.
//! Whichever separator appears first decides how the string is read: a
//! leading slash means the key is already in path form and is returned
//! as-is, a leading dot means dots are separators and any slash after it is
//! part of a component name (e.g. an interface called `eth0/1`).

/// Normalize a key (or value) to the slash-separated form.
///
/// Total and pure. Strings without separators come back unchanged.
pub fn normalize(key: &str) -> String {
    let mut seen_dot = false;
    let mut out = String::with_capacity(key.len());

    for c in key.chars() {
        match c {
            '/' if !seen_dot => return key.to_string(),
            '/' => out.push('.'),
            '.' => {
                seen_dot = true;
                out.push('/');
            }
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_key_becomes_path() {
        assert_eq!(normalize("net.ipv4.ip_forward"), "net/ipv4/ip_forward");
    }

    #[test]
    fn slash_first_short_circuits() {
        assert_eq!(normalize("/proc/sys/net.ipv4"), "/proc/sys/net.ipv4");
        assert_eq!(normalize("net/ipv4.conf"), "net/ipv4.conf");
    }

    #[test]
    fn slashes_after_a_dot_become_dots() {
        assert_eq!(
            normalize("net.ipv4.conf.eth0/1.forwarding"),
            "net/ipv4/conf/eth0.1/forwarding"
        );
    }

    #[test]
    fn leading_dot_swaps_every_separator() {
        assert_eq!(normalize(".a/b.c"), "/a.b/c");
    }

    #[test]
    fn no_separators_is_identity() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("1"), "1");
        assert_eq!(normalize("4096 87380 6291456"), "4096 87380 6291456");
    }

    #[test]
    fn non_ascii_is_preserved() {
        assert_eq!(normalize("dev.é.ü"), "dev/é/ü");
    }
}
