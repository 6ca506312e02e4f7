//! Spectral lines and local-maximum peak extraction

/// One spectral line (or one dense bin, before extraction)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpectrumPeak {
    /// Signed frequency in Hz (per-unit fundamental = 1)
    pub frequency: f64,

    /// Amplitude-normalized magnitude
    pub magnitude: f64,
}

impl SpectrumPeak {
    /// Nearest harmonic order, negative for backward-rotating components
    pub fn harmonic_order(&self) -> i64 {
        self.frequency.round() as i64
    }
}

/// Sparse, frequency-ordered list of harmonic line estimates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    peaks: Vec<SpectrumPeak>,
}

impl Spectrum {
    pub fn new(peaks: Vec<SpectrumPeak>) -> Self {
        Self { peaks }
    }

    pub fn peaks(&self) -> &[SpectrumPeak] {
        &self.peaks
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpectrumPeak> {
        self.peaks.iter()
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.frequency).collect()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.magnitude).collect()
    }

    /// Largest magnitude, 0.0 when empty
    pub fn max_magnitude(&self) -> f64 {
        self.peaks.iter().fold(0.0_f64, |m, p| m.max(p.magnitude))
    }

    /// Strongest line within `tolerance` of `frequency`
    pub fn peak_near(&self, frequency: f64, tolerance: f64) -> Option<&SpectrumPeak> {
        self.peaks
            .iter()
            .filter(|p| (p.frequency - frequency).abs() <= tolerance)
            .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
    }

    pub fn into_peaks(self) -> Vec<SpectrumPeak> {
        self.peaks
    }
}

/// Keep strict local maxima above a magnitude floor
///
/// `bins` must be sorted by ascending frequency. A neighbour only counts if
/// it sits within one bin spacing (`resolution`); a missing neighbour, at
/// either edge or across a gap, reads as zero magnitude. On a dense band
/// this compares each bin with its immediate neighbours; on an already
/// extracted list every line stands alone, so extraction is idempotent.
///
/// # Arguments
/// * `bins` - Frequency-sorted bins
/// * `resolution` - Bin spacing in Hz
/// * `floor` - Magnitudes must be strictly above this
pub fn extract_peaks(bins: &[SpectrumPeak], resolution: f64, floor: f64) -> Vec<SpectrumPeak> {
    // Half a bin of slack absorbs rounding in the frequency axis
    let reach = resolution * 1.5;
    let neighbour = |idx: Option<usize>, from: &SpectrumPeak| -> f64 {
        idx.and_then(|i| bins.get(i))
            .filter(|n| (n.frequency - from.frequency).abs() <= reach)
            .map_or(0.0, |n| n.magnitude)
    };

    bins.iter()
        .enumerate()
        .filter(|&(i, bin)| {
            let m = bin.magnitude;
            m > floor && m > neighbour(i.checked_sub(1), bin) && m > neighbour(Some(i + 1), bin)
        })
        .map(|(_, bin)| *bin)
        .collect()
}
