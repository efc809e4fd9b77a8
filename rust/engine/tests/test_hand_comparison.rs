use cardsaga_engine::cards::Card;
use cardsaga_engine::errors::GameError;
use cardsaga_engine::poker::{classify, compare, Category, HandStrength, Verdict};

fn strength(codes: &[&str]) -> HandStrength {
    let cards: Vec<Card> = codes.iter().map(|s| s.parse().unwrap()).collect();
    classify(&cards).unwrap()
}

#[test]
fn higher_pair_wins_regardless_of_kickers() {
    let kings = strength(&["KS", "KD", "2C", "3H", "4S"]);
    let queens = strength(&["QS", "QD", "AC", "JH", "9S"]);
    assert_eq!(compare(Category::Pair, &kings, &queens), Ok(Verdict::First));
    assert_eq!(compare(Category::Pair, &queens, &kings), Ok(Verdict::Second));
}

#[test]
fn equal_pairs_fall_back_to_kickers() {
    let a = strength(&["9S", "9D", "AC", "7H", "3S"]);
    let b = strength(&["9H", "9C", "AD", "7S", "2C"]);
    assert_eq!(compare(Category::Pair, &a, &b), Ok(Verdict::First));
}

#[test]
fn two_pair_compares_high_then_low_then_kicker() {
    let jacks_up = strength(&["JS", "JD", "3C", "3H", "4S"]);
    let tens_up = strength(&["10S", "10D", "9C", "9H", "AS"]);
    assert_eq!(
        compare(Category::TwoPair, &jacks_up, &tens_up),
        Ok(Verdict::First)
    );

    let jacks_fives = strength(&["JH", "JC", "5C", "5H", "2S"]);
    assert_eq!(
        compare(Category::TwoPair, &jacks_up, &jacks_fives),
        Ok(Verdict::Second)
    );

    let kicker_a = strength(&["8S", "8D", "6C", "6H", "KS"]);
    let kicker_b = strength(&["8H", "8C", "6D", "6S", "QS"]);
    assert_eq!(
        compare(Category::TwoPair, &kicker_a, &kicker_b),
        Ok(Verdict::First)
    );
}

#[test]
fn trips_and_quads_compare_the_repeated_rank() {
    let sevens = strength(&["7S", "7D", "7C", "2H", "3S"]);
    let sixes = strength(&["6S", "6D", "6C", "AH", "KS"]);
    assert_eq!(
        compare(Category::ThreeOfAKind, &sevens, &sixes),
        Ok(Verdict::First)
    );

    let quad_twos = strength(&["2S", "2D", "2C", "2H", "AS"]);
    let quad_threes = strength(&["3S", "3D", "3C", "3H", "4S"]);
    assert_eq!(
        compare(Category::FourOfAKind, &quad_twos, &quad_threes),
        Ok(Verdict::Second)
    );
}

#[test]
fn full_house_compares_trips_then_pair() {
    let a = strength(&["5S", "5D", "5C", "KH", "KS"]);
    let b = strength(&["4S", "4D", "4C", "AH", "AS"]);
    assert_eq!(compare(Category::FullHouse, &a, &b), Ok(Verdict::First));
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = strength(&["AS", "2D", "3C", "4H", "5S"]);
    let six_high = strength(&["2S", "3D", "4C", "5H", "6S"]);
    assert_eq!(
        compare(Category::Straight, &wheel, &six_high),
        Ok(Verdict::Second)
    );
}

#[test]
fn flush_and_high_card_compare_every_rank() {
    let a = strength(&["AH", "JH", "9H", "6H", "3H"]);
    let b = strength(&["AS", "JS", "9S", "6S", "2S"]);
    assert_eq!(compare(Category::Flush, &a, &b), Ok(Verdict::First));

    let c = strength(&["KH", "JD", "9C", "6H", "3S"]);
    let d = strength(&["KS", "JC", "9D", "6S", "3D"]);
    assert_eq!(compare(Category::HighCard, &c, &d), Ok(Verdict::Tie));
}

#[test]
fn royal_flushes_tie() {
    let a = strength(&["10S", "JS", "QS", "KS", "AS"]);
    let b = strength(&["10H", "JH", "QH", "KH", "AH"]);
    assert_eq!(compare(Category::RoyalFlush, &a, &b), Ok(Verdict::Tie));
}

#[test]
fn mismatched_category_is_an_error() {
    let pair = strength(&["KS", "KD", "2C", "3H", "4S"]);
    let trips = strength(&["7S", "7D", "7C", "2H", "3S"]);
    assert_eq!(
        compare(Category::Pair, &pair, &trips),
        Err(GameError::CategoryMismatch {
            expected: Category::Pair,
            first: Category::Pair,
            second: Category::ThreeOfAKind,
        })
    );
    assert!(compare(Category::Flush, &pair, &pair).is_err());
}
