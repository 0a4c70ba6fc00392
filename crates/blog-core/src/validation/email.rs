//! Syntactic email address check.
//!
//! Accepts `local@domain` where:
//! - the local part (≤ 64 chars) is a dot-atom of RFC 5322 `atext`, or a
//!   quoted string of printable ASCII without `"` or `\`;
//! - the domain is a bracketed IPv4 literal, or at least two dot-separated
//!   labels of ASCII alphanumerics and inner hyphens, ending in an
//!   alphabetic top-level label of two or more letters, or a punycode
//!   (`xn--`) top-level label.
//!
//! The whole address is at most 254 chars and never contains whitespace
//! outside a quoted local part (where it is rejected too). `a@b` fails: the
//! domain needs a dot.

use std::net::Ipv4Addr;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;
const MIN_TLD_LEN: usize = 2;
const PUNYCODE_PREFIX: &str = "xn--";

/// Whether `candidate` is a syntactically valid email address.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_ADDRESS_LEN {
        return false;
    }
    let Some((local, domain)) = candidate.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if let Some(quoted) = local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return !quoted.is_empty()
            && quoted
                .chars()
                .all(|ch| ch.is_ascii_graphic() && ch != '"' && ch != '\\');
    }
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

const fn is_atext(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return literal.parse::<Ipv4Addr>().is_ok();
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    !rest.is_empty() && rest.iter().all(|label| is_valid_label(label)) && is_valid_tld(tld)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

fn is_valid_tld(tld: &str) -> bool {
    let is_punycode = tld
        .get(..PUNYCODE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PUNYCODE_PREFIX));
    if is_punycode {
        return tld.len() > PUNYCODE_PREFIX.len() && is_valid_label(tld);
    }
    (MIN_TLD_LEN..=MAX_LABEL_LEN).contains(&tld.len())
        && tld.chars().all(|ch| ch.is_ascii_alphabetic())
}
