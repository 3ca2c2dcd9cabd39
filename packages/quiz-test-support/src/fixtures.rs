//! Builders for dog image URLs.
//!
//! URLs follow the upstream layout `https://images.dog.ceo/breeds/<breed>/<file>`
//! so the breed segment sits at index 4 after splitting on `/`.

pub const IMAGE_HOST: &str = "https://images.dog.ceo/breeds";

/// URL for a single photo of `breed`.
///
/// # Examples
/// ```
/// use quiz_test_support::fixtures::dog_url;
///
/// let url = dog_url("hound-afghan", "n02088094_1003.jpg");
/// assert_eq!(url, "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg");
/// ```
pub fn dog_url(breed: &str, file: &str) -> String {
    format!("{IMAGE_HOST}/{breed}/{file}")
}

/// One photo each for `count` distinct synthetic breeds (`breed-0`, `breed-1`, ...).
///
/// `offset` shifts the breed numbering so consecutive batches do not collide.
pub fn distinct_breeds(offset: usize, count: usize) -> Vec<String> {
    (offset..offset + count)
        .map(|i| dog_url(&format!("breed{i}"), &format!("photo_{i}.jpg")))
        .collect()
}

/// `photos` photos of the same `breed`.
pub fn same_breed(breed: &str, photos: usize) -> Vec<String> {
    (0..photos)
        .map(|i| dog_url(breed, &format!("{breed}_{i}.jpg")))
        .collect()
}

/// JSON body in the shape returned by `GET /api/breeds/image/random/<n>`.
pub fn api_body(urls: &[String]) -> String {
    let quoted: Vec<String> = urls.iter().map(|u| format!("\"{u}\"")).collect();
    format!(
        "{{\"message\":[{}],\"status\":\"success\"}}",
        quoted.join(",")
    )
}
