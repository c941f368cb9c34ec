#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{naive, strassen_multiply, Matrix, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks n in 1..=24, second the threshold in 1..=8
    let n = usize::from(data[0] % 24) + 1;
    let threshold = usize::from(data[1] % 8) + 1;

    // Small integer cells keep every intermediate exact in f64
    let body = &data[2..];
    let cell = |k: usize| -> f64 {
        if body.is_empty() {
            return 1.0;
        }
        f64::from(i8::from_ne_bytes([body[k % body.len()]]) % 16)
    };
    let a = Matrix::from_vec(n, (0..n * n).map(cell).collect()).unwrap();
    let b = Matrix::from_vec(n, (0..n * n).map(|k| cell(k + 7)).collect()).unwrap();

    let expected = naive::multiply(&a, &b).unwrap();
    let got = strassen_multiply(&a, &b, &Options::with_threshold(threshold)).unwrap();
    assert_eq!(got, expected);
});
