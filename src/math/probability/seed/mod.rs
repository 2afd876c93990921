pub mod source;

#[macro_export]
macro_rules! next_random_int {
    // Exklusive Range: min..max
    ($random_source:expr, $min:tt .. $max:tt) => {
        $random_source.next_int_in_range($min, $max)
    };
    // Einheitsintervall [0, 1)
    ($random_source:expr) => {
        $random_source.next_unit()
    };
}
