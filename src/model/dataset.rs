use serde::{Deserialize, Serialize};

/// Month labels of the built-in dataset, in display order
pub const MONTHS: [&str; 9] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept"];

/// Monthly visits per website, in input order
const WEBSITE_VISITS: [(&str, [u64; 9]); 6] = [
    ("FCCMA", [5254, 8257, 5234, 6247, 4274, 3258, 4268, 3285, 4175]),
    ("FLGISA", [1287, 1095, 1084, 1243, 1145, 1056, 1254, 1098, 1185]),
    ("Florida League of Mayors", [1945, 1534, 1834, 1932, 1864, 1574, 1648, 1648, 1524]),
    ("FBC LEO", [1082, 1077, 1058, 1064, 1109, 1165, 1067, 1168, 1085]),
    ("PSA", [225, 318, 351, 326, 398, 328, 314, 328, 274]),
    ("FMCA Online", [407, 518, 331, 478, 726, 405, 318, 260, 151]),
];

/// A tracked website and its visit counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    /// One count per bucket, aligned with `Dataset::buckets`
    pub counts: Vec<u64>,
    /// Sum of `counts`
    pub total: u64,
}

impl Entity {
    pub fn new(name: impl Into<String>, counts: Vec<u64>) -> Self {
        let total = counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c));
        Self {
            name: name.into(),
            counts,
            total,
        }
    }

    /// Count at the given bucket index
    pub fn count(&self, bucket: usize) -> Option<u64> {
        self.counts.get(bucket).copied()
    }
}

/// Serialized form of a dataset. Stored totals and row order are ignored.
#[derive(Debug, Deserialize)]
struct RawDataset {
    buckets: Vec<String>,
    entities: Vec<RawEntity>,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    name: String,
    counts: Vec<u64>,
}

impl From<RawDataset> for Dataset {
    fn from(raw: RawDataset) -> Self {
        let rows = raw.entities.into_iter().map(|e| (e.name, e.counts)).collect();
        Dataset::from_rows(raw.buckets, rows)
    }
}

/// Entities sorted by descending total, ties kept in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDataset")]
pub struct Dataset {
    buckets: Vec<String>,
    entities: Vec<Entity>,
}

impl Dataset {
    /// Build a dataset from unsorted rows.
    ///
    /// Totals are computed here; bucket consistency is checked later by
    /// `transpose`, so rows with the wrong number of counts are accepted.
    pub fn from_rows<B, N>(buckets: B, rows: Vec<(N, Vec<u64>)>) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        N: Into<String>,
    {
        let mut entities: Vec<Entity> = rows
            .into_iter()
            .map(|(name, counts)| Entity::new(name, counts))
            .collect();

        // sort_by is stable
        entities.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            buckets: buckets.into_iter().map(Into::into).collect(),
            entities,
        }
    }

    pub fn buckets(&self) -> &[String] {
        &self.buckets
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by name
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Count for an entity at a bucket label
    pub fn count(&self, entity: &str, bucket: &str) -> Option<u64> {
        let index = self.buckets.iter().position(|b| b == bucket)?;
        self.entity(entity)?.count(index)
    }

    /// Entity names in dataset order
    pub fn names(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.name.clone()).collect()
    }

    /// Sum of all entity totals
    pub fn grand_total(&self) -> u64 {
        self.entities
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.total))
    }
}

/// Build the built-in website visits dataset
pub fn build_dataset() -> Dataset {
    let rows = WEBSITE_VISITS
        .iter()
        .map(|(name, counts)| (*name, counts.to_vec()))
        .collect();
    let dataset = Dataset::from_rows(MONTHS, rows);
    tracing::debug!(
        entities = dataset.len(),
        buckets = dataset.buckets().len(),
        "built website visits dataset"
    );
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_are_row_sums() {
        let dataset = build_dataset();
        for entity in dataset.entities() {
            assert_eq!(entity.total, entity.counts.iter().sum::<u64>());
        }
        assert_eq!(dataset.entity("PSA").unwrap().total, 2862);
        assert_eq!(dataset.entity("FCCMA").unwrap().total, 44252);
    }

    #[test]
    fn test_sorted_by_total_descending() {
        let dataset = build_dataset();
        for pair in dataset.entities().windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
        assert_eq!(
            dataset.names(),
            vec![
                "FCCMA",
                "Florida League of Mayors",
                "FLGISA",
                "FBC LEO",
                "FMCA Online",
                "PSA",
            ]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let dataset = Dataset::from_rows(
            ["Jan"],
            vec![("first", vec![5]), ("big", vec![9]), ("second", vec![5])],
        );
        assert_eq!(dataset.names(), vec!["big", "first", "second"]);
    }

    #[test]
    fn test_scenario_totals() {
        let dataset = Dataset::from_rows(
            ["Jan", "Feb"],
            vec![("A", vec![10, 20]), ("B", vec![30, 5])],
        );
        assert_eq!(dataset.names(), vec!["B", "A"]);
        assert_eq!(dataset.entity("A").unwrap().total, 30);
        assert_eq!(dataset.entity("B").unwrap().total, 35);
        assert_eq!(dataset.count("B", "Feb"), Some(5));
        assert_eq!(dataset.count("B", "Mar"), None);
        assert_eq!(dataset.grand_total(), 65);
    }

    #[test]
    fn test_deserialize_recomputes_totals_and_order() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"buckets":["Jan"],"entities":[
                {"name":"small","counts":[1],"total":999},
                {"name":"big","counts":[50],"total":50}]}"#,
        )
        .unwrap();
        assert_eq!(dataset.names(), vec!["big", "small"]);
        assert_eq!(dataset.entity("small").unwrap().total, 1);
        assert_eq!(dataset.entity("big").unwrap().total, 50);
    }

    #[test]
    fn test_totals_saturate() {
        let entity = Entity::new("x", vec![u64::MAX, 1]);
        assert_eq!(entity.total, u64::MAX);

        let dataset = Dataset::from_rows(
            ["Jan"],
            vec![("a", vec![u64::MAX]), ("b", vec![u64::MAX])],
        );
        assert_eq!(dataset.grand_total(), u64::MAX);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_dataset(), build_dataset());
    }
}
