use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use teen_patti::cards::Card;
use teen_patti::deck::Deck;
use teen_patti::game::Round;

proptest! {
    #[test]
    fn shuffle_is_a_permutation_of_the_canonical_deck(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let canonical: HashSet<Card> = Deck::standard().as_slice().iter().copied().collect();
        let shuffled: HashSet<Card> = deck.as_slice().iter().copied().collect();
        prop_assert_eq!(deck.len(), 52);
        prop_assert_eq!(shuffled, canonical);
    }

    #[test]
    fn deal_consumes_nine_distinct_cards(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let round = Round::deal(&mut rng);
        prop_assert_eq!(round.players().len(), 3);
        prop_assert_eq!(round.deck().len(), 43);

        let dealt: Vec<Card> = round.players().iter().flat_map(|p| p.hand().iter()).collect();
        let unique: HashSet<Card> = dealt.iter().copied().collect();
        prop_assert_eq!(dealt.len(), 9);
        prop_assert_eq!(unique.len(), 9);
        prop_assert!(round.deck().as_slice().iter().all(|c| !unique.contains(c)));
    }

    #[test]
    fn same_seed_same_deck(seed in any::<u64>()) {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(a.as_slice(), b.as_slice());
    }
}
