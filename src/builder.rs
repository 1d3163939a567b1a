use crate::convolution::DEFAULT_MAX_CONVOLUTION_LEN;
use crate::FastIntervalSummer;

pub struct FastIntervalSummerBuilder {
    max_convolution_len: Option<u64>,
}

impl Default for FastIntervalSummerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FastIntervalSummerBuilder {
    pub fn new() -> Self {
        Self {
            max_convolution_len: None,
        }
    }
    pub fn with_max_convolution_len(mut self, max_convolution_len: u64) -> Self {
        self.max_convolution_len = Some(max_convolution_len);
        self
    }
    pub fn build(self) -> FastIntervalSummer {
        match self.max_convolution_len {
            Some(len) => FastIntervalSummer::with_max_convolution_len(len),
            None => FastIntervalSummer::with_max_convolution_len(DEFAULT_MAX_CONVOLUTION_LEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FastIntervalSummerBuilder;
    use crate::convolution::DEFAULT_MAX_CONVOLUTION_LEN;

    #[test]
    fn defaults_to_standard_ceiling() {
        let summer = FastIntervalSummerBuilder::new().build();
        assert_eq!(summer.max_convolution_len(), DEFAULT_MAX_CONVOLUTION_LEN);
    }

    #[test]
    fn explicit_ceiling_is_kept() {
        let summer = FastIntervalSummerBuilder::new()
            .with_max_convolution_len(1 << 12)
            .build();
        assert_eq!(summer.max_convolution_len(), 1 << 12);
    }

    #[test]
    #[should_panic]
    fn zero_ceiling_panics_on_build() {
        let _ = FastIntervalSummerBuilder::new()
            .with_max_convolution_len(0)
            .build();
    }
}
