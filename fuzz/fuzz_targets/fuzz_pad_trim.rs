#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::pad::{pad, trim};
use strassen_core::Matrix;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let n = usize::from(data[0] % 32) + 1;
    let values: Vec<f64> = (0..n * n)
        .map(|k| f64::from(data[k % data.len()]))
        .collect();
    let m = Matrix::from_vec(n, values).unwrap();

    let padded = pad(m.try_clone().unwrap()).unwrap();
    assert_eq!(padded.dim() % 2, 0);
    assert_eq!(trim(padded, n).unwrap(), m);
});
