//! Prompt assembly.

use oblique_core::Question;

const PREAMBLE: &str = "\
あなたはオブリーク・ストラテジーズのような短い問いを1つだけ作る装置です。
答えを与えるのではなく、読んだ人の思考が動き出すきっかけになる問いを置いてください。

# 出力ルール（厳守）
- 出力するのは問いを1つだけ。前置き・解説・タイトル・注釈は書かない。
- 番号・日付・作者名・出典・ハッシュタグを付けない。
- 箇条書きにしない。絵文字を使わない。
- 1文、長くても2文。自然な日本語で書く。
- 固有名詞（企業名、SNS名、時事、人名）を使わない。
- 参照の問いをそのまま写さない。同じ文になった場合は失敗とみなす。

# 作風の参照（この系列に揃えること。内容は写さない）
";

const CLOSING: &str = "問いを1つだけ出力してください。";

/// Build the generation prompt around reference questions.
///
/// Each reference is embedded on its own `- ` line in the given order.
///
/// # Examples
///
/// ```
/// use oblique_core::Question;
/// use oblique_generator::build_prompt;
///
/// let prompt = build_prompt(&[Question::new("何を急いでいる？"), Question::new("誰のため？")]);
/// assert!(prompt.contains("- 何を急いでいる？\n- 誰のため？\n"));
/// ```
pub fn build_prompt(references: &[Question]) -> String {
    let reference_lines = references
        .iter()
        .map(|q| format!("- {}", q))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{PREAMBLE}{reference_lines}\n\n{CLOSING}")
}
