use movie_recommender::{build_index, Catalog, MovieRecord};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "action", "drama", "crime", "space", "mafia", "dark", "heist", "prison", "the", "and", "of",
    "sci-fi", "nolan", "scott", "thriller", "epic", "family",
];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..5).prop_map(|w| w.join(" "))
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((text(), text(), text()), 1..12).prop_map(|rows| {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (genre, director, tags))| {
                MovieRecord::new(format!("Movie {i}"), genre, director, 5.0, 2000, tags)
            })
            .collect();
        Catalog::new(records).unwrap()
    })
}

proptest! {
    #[test]
    fn matrix_invariants_hold(catalog in catalog()) {
        let index = build_index(catalog).unwrap();
        let m = index.matrix();
        for i in 0..m.size() {
            prop_assert_eq!(m.get(i, i), Some(1.0));
            for j in 0..m.size() {
                let s = m.get(i, j).unwrap();
                prop_assert_eq!(s, m.get(j, i).unwrap());
                prop_assert!((0.0..=1.0).contains(&s));
            }
        }
    }

    #[test]
    fn rank_invariants_hold(catalog in catalog(), top_n in 0i64..20) {
        let index = build_index(catalog).unwrap();
        let n = index.len();
        for i in 0..n {
            let hits = index.rank(i, top_n).unwrap();
            prop_assert_eq!(hits.len(), (top_n as usize).min(n - 1));
            prop_assert!(hits.keys().all(|&k| k != i));
            for pair in hits.list.windows(2) {
                prop_assert!(
                    pair[0].score > pair[1].score
                        || (pair[0].score == pair[1].score && pair[0].key < pair[1].key)
                );
            }
        }
    }

    #[test]
    fn rebuild_is_deterministic(catalog in catalog()) {
        let a = build_index(catalog.clone()).unwrap();
        let b = build_index(catalog).unwrap();
        prop_assert_eq!(a.matrix(), b.matrix());
    }
}
