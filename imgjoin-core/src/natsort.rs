use std::cmp::Ordering;

/// Version-aware (natural) comparison of file names: embedded ASCII
/// digit runs compare numerically, everything else byte-wise, so
/// `part9` sorts before `part10` regardless of zero padding.
///
/// Total order: ties on numeric value fall back to run length and then
/// the raw strings.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ab = a.as_bytes();
    let bb = b.as_bytes();
    let mut i = 0;
    let mut j = 0;
    while i < ab.len() && j < bb.len() {
        let ca = ab[i];
        let cb = bb[j];
        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let ra = digit_run(ab, &mut i);
            let rb = digit_run(bb, &mut j);
            let ord = cmp_digit_runs(ra, rb);
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            let ord = ca.cmp(&cb);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }
    (ab.len() - i).cmp(&(bb.len() - j)).then_with(|| a.cmp(b))
}

fn digit_run<'a>(bytes: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    &bytes[start..*pos]
}

/// Numeric comparison without parsing into an integer type: strip
/// leading zeros, compare by length, then digit-wise.
fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_zeros(a);
    let b = strip_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_zeros(run: &[u8]) -> &[u8] {
    let nz = run.iter().position(|&b| b != b'0').unwrap_or(run.len());
    &run[nz..]
}
