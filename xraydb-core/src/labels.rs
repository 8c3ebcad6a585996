/// Normalizes an edge, level or ion label to title form: the first letter of
/// every run of letters is upper case, the rest lower case.
///
/// `"k"` becomes `"K"`, `"l3"` becomes `"L3"`, `"fe2+"` becomes `"Fe2+"`.
pub(crate) fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_word = false;
    for ch in label.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// First component of a composite level label (`"L2,3"` gives `"L2"`).
pub(crate) fn first_component(label: &str) -> Option<&str> {
    label
        .split_once(',')
        .map(|(first, _)| first.trim())
        .filter(|first| !first.is_empty())
}
