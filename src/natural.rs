use std::cmp::Ordering;

/// Compare two strings in natural (human) order: runs of ASCII digits are
/// compared by numeric value instead of byte order, so `file2` sorts before
/// `file10`. Runs with leading zeros compare left-aligned, placing `a02`
/// before `a2`. Non-digit bytes compare as bytes, case-sensitively.
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(a, i);
            let end_b = digit_run_end(b, j);
            let ord = compare_digit_runs(&a[i..end_a], &b[j..end_b]);
            if ord != Ordering::Equal {
                return ord;
            }
            i = end_a;
            j = end_b;
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    // A run with a leading zero compares digit by digit, left aligned, so
    // zero-padded numbers sort before unpadded ones of the same value (02
    // before 2), as strnatcmp orders them. Runs without leading zeros
    // compare as whole numbers: more digits means a larger value.
    if a[0] == b'0' || b[0] == b'0' {
        a.cmp(b)
    } else {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}
