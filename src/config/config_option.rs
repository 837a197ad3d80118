/// A configuration option, bounded by some minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the given value is within bounds.
    /// Otherwise, the value is unchanged and the bounds are returned as an error.
    pub fn set(&mut self, value: T) -> Result<(), (T, T)> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(self.min_max())
        }
    }
}
