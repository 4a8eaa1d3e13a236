/// Fixed stock classification a product belongs to.
///
/// The numeric code is what clients send; the label is derived from it and
/// never accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockGroup {
    Beverages,
    Groceries,
    Technology,
    HomeOffice,
}

impl StockGroup {
    pub const ALL: [StockGroup; 4] = [
        StockGroup::Beverages,
        StockGroup::Groceries,
        StockGroup::Technology,
        StockGroup::HomeOffice,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }

    pub fn code(self) -> i64 {
        match self {
            StockGroup::Beverages => 100,
            StockGroup::Groceries => 200,
            StockGroup::Technology => 300,
            StockGroup::HomeOffice => 400,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockGroup::Beverages => "Bebidas e Cafés",
            StockGroup::Groceries => "Alimentos e Mercearia",
            StockGroup::Technology => "Tecnologia e Acessórios",
            StockGroup::HomeOffice => "Casa e Escritório",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_labels() {
        let labels: Vec<(i64, &str)> = [100, 200, 300, 400]
            .into_iter()
            .map(|c| (c, StockGroup::from_code(c).unwrap().label()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (100, "Bebidas e Cafés"),
                (200, "Alimentos e Mercearia"),
                (300, "Tecnologia e Acessórios"),
                (400, "Casa e Escritório"),
            ]
        );
    }

    #[test]
    fn unknown_codes_do_not_resolve() {
        for code in [0, -100, 101, 150, 500, i64::MAX] {
            assert_eq!(StockGroup::from_code(code), None, "code {code} must be rejected");
        }
    }

    #[test]
    fn code_round_trips_through_lookup() {
        for group in StockGroup::ALL {
            assert_eq!(StockGroup::from_code(group.code()), Some(group));
        }
    }
}
