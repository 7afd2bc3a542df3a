use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{Square, VerificationReport, construct as construct_square, random_variant};

/// Convert a Square to a JsValue (2D array of numbers).
fn square_to_js(sq: &Square) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&sq.to_rows()).map_err(|e| JsError::new(&e.to_string()))
}

/// Construct the magic square of order n.
/// Returns a 2D array directly usable in JavaScript.
#[wasm_bindgen]
pub fn construct(n: u32) -> Result<JsValue, JsError> {
    let sq = construct_square(n as usize).map_err(|e| JsError::new(&e.to_string()))?;
    square_to_js(&sq)
}

/// Construct a randomly rotated or reflected magic square of order n.
#[wasm_bindgen]
pub fn variant(n: u32, seed: u64) -> Result<JsValue, JsError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sq = random_variant(n as usize, &mut rng).map_err(|e| JsError::new(&e.to_string()))?;
    square_to_js(&sq)
}

/// Check the line sums of a 2D array of integers.
#[wasm_bindgen]
pub fn verify(rows: JsValue) -> Result<WasmReport, JsError> {
    let rows: Vec<Vec<i64>> =
        serde_wasm_bindgen::from_value(rows).map_err(|e| JsError::new(&e.to_string()))?;
    let sq = Square::from_rows(&rows).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(WasmReport {
        report: crate::verify(&sq),
    })
}

/// Result of [`verify`] as seen from JavaScript.
///
/// Sums are returned as `f64`; they are exact for any square whose line sums
/// fit in 53 bits.
#[wasm_bindgen]
pub struct WasmReport {
    report: VerificationReport,
}

#[wasm_bindgen]
impl WasmReport {
    #[wasm_bindgen(getter, js_name = isMagic)]
    pub fn is_magic(&self) -> bool {
        self.report.is_magic
    }

    #[wasm_bindgen(getter, js_name = requiredSum)]
    pub fn required_sum(&self) -> f64 {
        self.report.required_sum as f64
    }

    #[wasm_bindgen(getter, js_name = failingRows)]
    pub fn failing_rows(&self) -> Vec<u32> {
        self.report.failing_rows.iter().map(|&i| i as u32).collect()
    }

    #[wasm_bindgen(getter, js_name = failingCols)]
    pub fn failing_cols(&self) -> Vec<u32> {
        self.report.failing_cols.iter().map(|&i| i as u32).collect()
    }

    #[wasm_bindgen(getter, js_name = diag1Sum)]
    pub fn diag1_sum(&self) -> f64 {
        self.report.diag1_sum as f64
    }

    #[wasm_bindgen(getter, js_name = diag2Sum)]
    pub fn diag2_sum(&self) -> f64 {
        self.report.diag2_sum as f64
    }

    /// Human-readable summary naming any failing lines.
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.report.to_string()
    }
}
