/// Value written for samples above the threshold.
pub const ACTIVE: u8 = 255;

/// Binarizes `profile` in place: samples strictly greater than `threshold`
/// become [`ACTIVE`], all others become 0.
pub fn binarize_in_place(profile: &mut [u8], threshold: u8) {
    for sample in profile.iter_mut() {
        *sample = if *sample > threshold { ACTIVE } else { 0 };
    }
}

pub fn binarize(profile: &[u8], threshold: u8) -> Vec<u8> {
    let mut out = profile.to_vec();
    binarize_in_place(&mut out, threshold);
    out
}
