//! Lexicon and context-rule part-of-speech tagger.
//!
//! Two passes: a lexical pass classifies each word in isolation, then a
//! left-to-right pass settles ambiguous words (verb forms, unknown words,
//! "to") from the nearest preceding non-adverb tag.

use minutes_core::PosTag;

use super::lexicon::{self, VerbForm};

/// Lexical class before context is considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lex {
    Fixed(PosTag),
    Verb(VerbForm),
    /// Infinitival particle or adposition, decided by the next word.
    To,
    Unknown,
}

/// What precedes a token, skipping adverbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Context {
    ClauseStart,
    After(usize, PosTag),
}

/// Tag every word of a tokenized sentence.
pub fn tag(words: &[&str]) -> Vec<PosTag> {
    let lowers: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let lexes: Vec<Lex> = (0..words.len())
        .map(|i| lexical(words[i], &lowers[i], is_clause_start(words, i)))
        .collect();

    let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());
    for i in 0..words.len() {
        let ctx = context(&tags);
        let tag = match lexes[i] {
            Lex::Fixed(tag) => tag,
            Lex::To => {
                if takes_infinitive(words, &lexes, i + 1) {
                    PosTag::Particle
                } else {
                    PosTag::Adposition
                }
            }
            Lex::Verb(form) => resolve_verb(form, words, &lowers, &tags, ctx, i),
            Lex::Unknown => resolve_unknown(words[i], &lowers, ctx),
        };
        tags.push(tag);
    }

    promote_light_verbs(&lowers, &mut tags);
    tags
}

fn is_punctuation(word: &str) -> bool {
    !word.chars().any(char::is_alphanumeric)
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_clause_start(words: &[&str], i: usize) -> bool {
    i == 0 || is_punctuation(words[i - 1])
}

fn lexical(word: &str, lower: &str, clause_start: bool) -> Lex {
    if is_punctuation(word) {
        return Lex::Fixed(PosTag::Punctuation);
    }
    if lexicon::is_numeral(lower) {
        return Lex::Fixed(PosTag::Numeral);
    }
    // Mid-sentence capitals are names, whatever the lexicon says ("Mark", "May").
    if is_capitalized(word) && !clause_start && lower != "i" && !lower.starts_with("i'") {
        return Lex::Unknown;
    }
    if lower == "to" {
        return Lex::To;
    }

    let fixed = if lexicon::is_auxiliary(lower) {
        PosTag::Auxiliary
    } else if lexicon::is_determiner(lower) {
        PosTag::Determiner
    } else if lexicon::is_pronoun(lower) {
        PosTag::Pronoun
    } else if lexicon::is_conjunction(lower) {
        PosTag::Conjunction
    } else if lexicon::is_adposition(lower) {
        PosTag::Adposition
    } else if lexicon::is_adjective(lower) {
        PosTag::Adjective
    } else if lexicon::is_adverb(lower) {
        PosTag::Adverb
    } else if let Some(form) = lexicon::verb_form(lower) {
        return Lex::Verb(form);
    } else {
        return Lex::Unknown;
    };
    Lex::Fixed(fixed)
}

fn context(tags: &[PosTag]) -> Context {
    for (k, tag) in tags.iter().enumerate().rev() {
        match tag {
            PosTag::Adverb => continue,
            PosTag::Punctuation => return Context::ClauseStart,
            other => return Context::After(k, *other),
        }
    }
    Context::ClauseStart
}

/// "to" is infinitival when a base verb or an unknown lower-case word follows.
fn takes_infinitive(words: &[&str], lexes: &[Lex], next: usize) -> bool {
    match lexes.get(next) {
        Some(Lex::Verb(VerbForm::Base)) => true,
        Some(Lex::Unknown) => !is_capitalized(words[next]),
        _ => false,
    }
}

fn resolve_verb(
    form: VerbForm,
    words: &[&str],
    lowers: &[String],
    tags: &[PosTag],
    ctx: Context,
    i: usize,
) -> PosTag {
    if form == VerbForm::Progressive {
        return match ctx {
            Context::After(_, PosTag::Auxiliary | PosTag::Pronoun) => PosTag::Verb,
            _ => PosTag::Noun,
        };
    }

    match ctx {
        Context::ClauseStart => {
            let before_aux = lowers.get(i + 1).is_some_and(|n| lexicon::is_auxiliary(n));
            if form == VerbForm::Base && before_aux && is_capitalized(words[i]) {
                // "Mark will ..."
                PosTag::ProperNoun
            } else if form == VerbForm::ThirdPerson && lexicon::is_noun_preferred(&lowers[i]) {
                PosTag::Noun
            } else {
                PosTag::Verb
            }
        }
        Context::After(
            _,
            PosTag::Determiner | PosTag::Adjective | PosTag::Numeral | PosTag::Adposition,
        ) => PosTag::Noun,
        Context::After(_, PosTag::Auxiliary | PosTag::Particle | PosTag::Pronoun | PosTag::ProperNoun) => {
            PosTag::Verb
        }
        Context::After(_, PosTag::Noun) => match form {
            VerbForm::Base => PosTag::Noun,
            VerbForm::ThirdPerson if lexicon::is_noun_preferred(&lowers[i]) => PosTag::Noun,
            _ => PosTag::Verb,
        },
        Context::After(_, PosTag::Verb) => match form {
            VerbForm::Past => PosTag::Verb,
            _ => PosTag::Noun,
        },
        Context::After(k, PosTag::Conjunction) => {
            // Coordinated verbs share the tag of the first conjunct.
            let first = tags[..k].iter().rposition(|t| *t == PosTag::Verb);
            if first.is_some_and(|f| k - f <= 3) {
                PosTag::Verb
            } else {
                PosTag::Noun
            }
        }
        Context::After(..) => PosTag::Verb,
    }
}

fn resolve_unknown(word: &str, lowers: &[String], ctx: Context) -> PosTag {
    if is_capitalized(word) {
        return match ctx {
            Context::ClauseStart if lexicon::is_common_word(word) => PosTag::Noun,
            _ => PosTag::ProperNoun,
        };
    }
    match ctx {
        Context::After(k, PosTag::Auxiliary) if lexicon::is_modal(&lowers[k]) => PosTag::Verb,
        Context::After(_, PosTag::Particle) => PosTag::Verb,
        _ => PosTag::Noun,
    }
}

/// "do"/"have" forms with no verb after them are main verbs.
fn promote_light_verbs(lowers: &[String], tags: &mut [PosTag]) {
    for i in 0..tags.len() {
        if tags[i] != PosTag::Auxiliary || !lexicon::is_light_verb(&lowers[i]) {
            continue;
        }
        let next = tags[i + 1..].iter().find(|t| **t != PosTag::Adverb);
        if !matches!(next, Some(PosTag::Verb | PosTag::Auxiliary)) {
            tags[i] = PosTag::Verb;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PosTag::*;

    fn tags(sentence: &str) -> Vec<PosTag> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        tag(&words)
    }

    #[test]
    fn test_subject_modal_verb_object() {
        assert_eq!(
            tags("Alice will finalize the report next Friday ."),
            vec![ProperNoun, Auxiliary, Verb, Determiner, Noun, Adjective, ProperNoun, Punctuation]
        );
    }

    #[test]
    fn test_sentence_initial_imperative() {
        assert_eq!(
            tags("Ping the vendor in 3 days ."),
            vec![Verb, Determiner, Noun, Adposition, Numeral, Noun, Punctuation]
        );
        assert_eq!(tags("Deploy before October .")[0], Verb);
        assert_eq!(tags("Wrap up by end of October .")[0], Verb);
    }

    #[test]
    fn test_imperative_after_clause_punctuation() {
        let t = tags("Alice : please send the deck");
        assert_eq!(t[0], ProperNoun);
        assert_eq!(t[3], Verb);
    }

    #[test]
    fn test_name_that_is_also_a_verb() {
        assert_eq!(tags("Mark will send it")[0..3], [ProperNoun, Auxiliary, Verb]);
        assert_eq!(tags("Ask Mark about it")[0..2], [Verb, ProperNoun]);
    }

    #[test]
    fn test_verb_form_after_determiner_is_noun() {
        let t = tags("The review is done");
        assert_eq!(t[1], Noun);
        assert!(!t.contains(&Verb));
    }

    #[test]
    fn test_third_person_after_subject() {
        assert_eq!(tags("Bob sends the invoice")[1], Verb);
        assert_eq!(tags("The team ships it")[2], Verb);
    }

    #[test]
    fn test_noun_preferred_plurals() {
        let t = tags("Meeting notes :");
        assert_eq!(t, vec![Noun, Noun, Punctuation]);
    }

    #[test]
    fn test_infinitival_to() {
        let t = tags("We need to circulate the draft");
        assert_eq!(t[..4], [Pronoun, Verb, Particle, Verb]);
        let t = tags("Hand the draft to Marco");
        assert_eq!(t[3], Adposition);
        assert_eq!(t[4], ProperNoun);
    }

    #[test]
    fn test_unknown_word_after_modal_is_verb() {
        let t = tags("Dana will reprovision the cluster");
        assert_eq!(t[2], Verb);
        let t = tags("Dana saw the cluster reprovision");
        assert_eq!(t[4], Noun);
    }

    #[test]
    fn test_progressive_needs_auxiliary() {
        assert_eq!(tags("Bob is reviewing it")[2], Verb);
        assert_eq!(tags("Scheduling is hard")[0], Noun);
    }

    #[test]
    fn test_light_verbs() {
        assert_eq!(tags("Alice has the slides")[1], Verb);
        assert_eq!(tags("Alice has sent the slides")[1..3], [Auxiliary, Verb]);
    }

    #[test]
    fn test_coordinated_verbs() {
        let t = tags("Review and approve the budget");
        assert_eq!(t[..3], [Verb, Conjunction, Verb]);
    }

    #[test]
    fn test_no_verb_sentences() {
        assert!(!tags("Great demo today").contains(&Verb));
        assert!(!tags("No deadline for this one .").contains(&Verb));
        assert!(!tags("Budget review").contains(&Verb));
    }

    #[test]
    fn test_pronoun_i_mid_sentence() {
        let t = tags("Then I will book it");
        assert_eq!(t[1], Pronoun);
        assert_eq!(t[3], Verb);
    }
}
