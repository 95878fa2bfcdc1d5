//! Person names for generated users
//!
//! Both tables are indexed with independent draws in `0..=99`.

use crate::api::NewUser;
use crate::generator::random::RandomSource;

pub const FIRST_NAMES: [&str; 100] = [
    "james", "john", "robert", "michael", "william", "david", "richard", "charles", "joseph",
    "thomas", "christopher", "daniel", "paul", "mark", "donald", "george", "kenneth", "steven",
    "edward", "brian", "ronald", "anthony", "kevin", "jason", "matthew", "gary", "timothy", "jose",
    "larry", "jeffrey", "frank", "scott", "eric", "stephen", "andrew", "raymond", "gregory",
    "joshua", "jerry", "dennis", "walter", "patrick", "peter", "harold", "douglas", "henry",
    "carl", "arthur", "ryan", "roger", "joe", "juan", "jack", "albert", "jonathan", "justin",
    "terry", "gerald", "keith", "samuel", "willie", "ralph", "lawrence", "nicholas", "roy",
    "benjamin", "bruce", "brandon", "adam", "harry", "fred", "wayne", "billy", "steve", "louis",
    "jeremy", "aaron", "randy", "howard", "eugene", "carlos", "russell", "bobby", "victor",
    "martin", "ernest", "phillip", "todd", "jesse", "craig", "alan", "shawn", "clarence", "sean",
    "philip", "chris", "johnny", "earl", "jimmy", "antonio",
];

pub const LAST_NAMES: [&str; 100] = [
    "smith", "johnson", "williams", "jones", "brown", "davis", "miller", "wilson", "moore",
    "taylor", "anderson", "thomas", "jackson", "white", "harris", "martin", "thompson", "garcia",
    "martinez", "robinson", "clark", "rodriguez", "lewis", "lee", "walker", "hall", "allen",
    "young", "hernandez", "king", "wright", "lopez", "hill", "scott", "green", "adams", "baker",
    "gonzalez", "nelson", "carter", "mitchell", "perez", "roberts", "turner", "phillips",
    "campbell", "parker", "evans", "edwards", "collins", "stewart", "sanchez", "morris", "rogers",
    "reed", "cook", "morgan", "bell", "murphy", "bailey", "rivera", "cooper", "richardson", "cox",
    "howard", "ward", "torres", "peterson", "gray", "ramirez", "james", "watson", "brooks",
    "kelly", "sanders", "price", "bennett", "wood", "barnes", "ross", "henderson", "coleman",
    "jenkins", "perry", "powell", "long", "patterson", "hughes", "flores", "washington", "butler",
    "simmons", "foster", "gonzales", "bryant", "alexander", "russell", "griffin", "diaz", "hayes",
];

/// Pick a first and last name and derive the user's display name and email.
///
/// Display name is `"{first} {last}"` and email is `"{first}@{last}.com"`.
pub fn generate_user(rng: &mut impl RandomSource) -> NewUser {
    let first = FIRST_NAMES[rng.next_in_range(0, 99) as usize];
    let last = LAST_NAMES[rng.next_in_range(0, 99) as usize];

    NewUser {
        name: format!("{first} {last}"),
        email: format!("{first}@{last}.com"),
    }
}
