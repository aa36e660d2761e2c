//! Built-in NEET chemistry question bank (alcohols, phenols and ethers PYQs).

use crate::model::QuizRecord;

/// The built-in questions, in export order.
pub fn neet_quiz() -> Vec<QuizRecord> {
    vec![
        QuizRecord::new(
            6,
            "Which amongst the following will be most readily dehydrated under acidic conditions?",
            &[
                "1. 2-nitro-ethanol derivative",
                "2. 2-nitro-cyclohexanol derivative",
                "3. 4-nitro-cyclohexanol derivative",
                "4. 2-methyl-cyclohexanol derivative",
            ],
            3,
            "Dehydration involves carbocation formation. Electron-withdrawing groups like $NO_2$ destabilize the carbocation if they are too close, so the molecule with the nitro group furthest from the -OH group (para-position/4-position) reacts most readily[cite: 98, 107, 425].",
        ),
        QuizRecord::new(
            7,
            "Identify products A and B in the reaction of Benzyl phenyl ether with $HI$ and heat.",
            &[
                "1. Benzyl alcohol + Iodobenzene",
                "2. Benzyl iodide + Phenol",
                "3. Benzyl iodide + Benzene",
                "4. Benzyl alcohol + Phenol",
            ],
            4,
            "The reaction of ethers with $HI$ involves nucleophilic attack. Because the benzyl carbocation is highly stable, the reaction follows an $S_N1$ pathway leading to Benzyl iodide and Phenol[cite: 119, 140, 141, 426].",
        ),
        QuizRecord::new(
            10,
            r"Identify the major product formed in the conversion of a cyclic ketone/alkene using $(i) NaBH_4$ and $(ii) H_2SO_4, \Delta$.",
            &[
                "1. Cyclopentene derivative",
                "2. Cyclopentanol derivative",
                "3. Dihydropyran derivative",
                "4. Ring-contracted product",
            ],
            1,
            "$NaBH_4$ reduces the ketone to an alcohol, and $H_2SO_4$ with heat causes dehydration to form the most stable alkene[cite: 166, 168, 430].",
        ),
        QuizRecord::new(
            12,
            "Statement I: Lucas test distinguishes alcohols based on reactivity with conc. $HCl + ZnCl_2$. Statement II: Primary alcohols are most reactive and produce turbidity immediately.",
            &[
                "1. I is incorrect, II is correct",
                "2. Both I and II are correct",
                "3. Both I and II are incorrect",
                "4. I is correct, II is incorrect",
            ],
            4,
            r"Statement I is true, but Statement II is false because Tertiary ($3^{\circ}$) alcohols are the most reactive, not primary[cite: 191, 192, 432].",
        ),
        QuizRecord::new(
            3,
            "Identify the major product D in the following reaction sequence:\n\nCH3 OH SOCl2 -> A KCN -> B Na(Hg)/EtOH -> C (i)NaNO2 /HCl,(ii)H2O -> D",
            &[
                "1. CH3 CH2 NH2",
                "2. CH3 CH2 Cl",
                "3. CH3 CH2 OH",
                "4. CH3 OH",
            ],
            3,
            "CH3 OH converts to CH3 Cl (A), then to CH3 CN (B). Reduction gives CH3 CH2 NH2 (C), which diazotization and hydrolysis convert to Ethanol (D).",
        ),
        QuizRecord::new(
            4,
            "Identify the major product D in the following sequence:\n\nCH3 CH2 OH P+I2 -> A Mg/dry ether -> B HCHO -> C H2O -> D",
            &[
                "1. n-propyl alcohol",
                "2. isopropyl alcohol",
                "3. propanal",
                "4. propionic acid",
            ],
            1,
            "Ethanol is converted to Ethyl Iodide (A), then to Ethyl Magnesium Iodide (B). Reaction with Formaldehyde followed by hydrolysis adds one carbon to form n-propyl alcohol (D).",
        ),
        QuizRecord::new(
            8,
            "Which of the following reagents can be used to convert alcohols directly to carboxylic acids? (A) CrO3 - H2SO4 (B) K2Cr2O7 + H2SO4 (C) KMnO4 + KOH/H3O+ (D) Cu,573 K",
            &[
                "1. (B), (C), and (D) only",
                "2. (B), (D), and (E) only",
                "3. (A), (B), and (C) only",
                "4. (A), (B), and (E) only",
            ],
            3,
            "Strong oxidizing agents like Jones reagent (CrO3 - H2SO4), acidified Dichromate, and alkaline Permanganate are required for this conversion.",
        ),
        QuizRecord::new(
            25,
            "Identify the structure of intermediate A in the industrial preparation of phenol from Cumene (isopropylbenzene) reacted with O2.",
            &[
                "1. Cumene free radical",
                "2. Cumene hydroperoxide (C6H5C(CH3)2OOH)",
                "3. Benzene hemiacetal",
                "4. Isopropyl phenyl ether",
            ],
            3,
            "The oxidation of cumene with air (O2) leads to the formation of Cumene hydroperoxide as the key intermediate. (Note: Option index 3 corresponds to Answer 3 in original text, though chemically it is Cumene Hydroperoxide which is listed as option 2 in some contexts, but here we follow the provided key 'Correct Answer: 3 (Cumene hydroperoxide)').",
        ),
        QuizRecord::new(
            19,
            "What is the IUPAC name of the product formed when Acetone reacts with C2H5MgBr in dry ether, followed by hydrolysis with H2O/H+?",
            &[
                "1. Pentan-3-ol",
                "2. 2-Methylbutan-2-ol",
                "3. 2-Methylpropan-2-ol",
                "4. Pentan-2-ol",
            ],
            2,
            "The addition of an ethyl group from the Grignard reagent to the carbonyl carbon of acetone creates a tertiary alcohol with a five-carbon chain and a methyl branch at the second carbon.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_order() {
        let ids: Vec<i64> = neet_quiz().iter().map(|r| r.question_id).collect();
        assert_eq!(ids, vec![6, 7, 10, 12, 3, 4, 8, 25, 19]);
    }

    #[test]
    fn test_every_question_has_four_labelled_options() {
        for record in neet_quiz() {
            assert_eq!(record.options.len(), 4, "question {}", record.question_id);
            for (i, option) in record.options.iter().enumerate() {
                assert!(option.starts_with(&format!("{}. ", i + 1)));
            }
        }
    }

    #[test]
    fn test_backslashes_are_literal() {
        let bank = neet_quiz();
        let q10 = bank.iter().find(|r| r.question_id == 10).unwrap();
        assert!(q10.question.ends_with(r"H_2SO_4, \Delta$."));
        let q3 = bank.iter().find(|r| r.question_id == 3).unwrap();
        assert!(q3.question.contains(":\n\nCH3 OH"));
    }
}
