use movie_recommender::{build_index, Catalog, RecommendError};

fn main() -> Result<(), RecommendError> {
    // build once
    let index = build_index(Catalog::sample())?;

    // query many times
    for rec in index.recommend("The Dark Knight", 3)? {
        println!("{:<28} {:.4}", rec.title, rec.score);
    }

    match index.recommend("Nonexistent Movie", 5) {
        Err(e) if e.is_not_found() => println!("lookup failed: {e}"),
        other => println!("unexpected: {other:?}"),
    }

    // raw ranking by index
    let hits = index.rank(index.resolve_title("Se7en")?, 2)?;
    println!("{:#?}", hits);
    Ok(())
}
