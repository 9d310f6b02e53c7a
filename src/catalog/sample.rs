use super::MovieRecord;

const SAMPLE: [(&str, &str, &str, f64, i32, &str); 16] = [
    ("The Shawshank Redemption", "Drama", "Frank Darabont", 9.3, 1994, "prison hope friendship redemption"),
    ("The Godfather", "Crime", "Francis Ford Coppola", 9.2, 1972, "mafia family crime power"),
    ("The Dark Knight", "Action", "Christopher Nolan", 9.0, 2008, "superhero action thriller dark"),
    ("Pulp Fiction", "Crime", "Quentin Tarantino", 8.9, 1994, "crime nonlinear dark comedy"),
    ("Forrest Gump", "Drama", "Robert Zemeckis", 8.8, 1994, "life story inspiration romance drama"),
    ("Inception", "Sci-Fi", "Christopher Nolan", 8.8, 2010, "dreams heist mind-bending sci-fi"),
    ("The Matrix", "Sci-Fi", "Wachowski Brothers", 8.7, 1999, "ai reality action sci-fi"),
    ("Goodfellas", "Crime", "Martin Scorsese", 8.7, 1990, "mafia crime true story"),
    ("Interstellar", "Sci-Fi", "Christopher Nolan", 8.6, 2014, "space time family sci-fi"),
    ("The Prestige", "Drama", "Christopher Nolan", 8.5, 2006, "magic rivalry mystery drama"),
    ("The Silence of the Lambs", "Thriller", "Jonathan Demme", 8.6, 1991, "psychological serial killer crime thriller"),
    ("Se7en", "Thriller", "David Fincher", 8.6, 1995, "detective dark serial killer thriller"),
    ("Fight Club", "Drama", "David Fincher", 8.8, 1999, "psychological twist identity drama"),
    ("The Green Mile", "Drama", "Frank Darabont", 8.6, 1999, "prison death row drama emotional"),
    ("The Departed", "Crime", "Martin Scorsese", 8.5, 2006, "crime undercover mafia thriller"),
    ("Gladiator", "Action", "Ridley Scott", 8.5, 2000, "action historical epic warrior"),
];

pub(super) fn records() -> Vec<MovieRecord> {
    SAMPLE
        .iter()
        .map(|&(title, genre, director, rating, year, tags)| {
            MovieRecord::new(title, genre, director, rating, year, tags)
        })
        .collect()
}
