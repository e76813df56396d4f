use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matcher;
use crate::models::{MatchOutcome, Rule, RuleScore, RuleSetError, RuleSpec};
use crate::normalize::normalize;
use crate::stem::stem;

/// Returned when no rule reaches the minimum confidence. A fixed string, not
/// a random pick, so identical input always yields identical output.
pub const DEFAULT_FALLBACK: &str = "Could you please re-phrase that?";

/// On-disk form of an externally supplied rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDocument {
    #[serde(default = "default_fallback")]
    pub fallback: String,
    pub rules: Vec<RuleSpec>,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

/// The rule table. Built once at startup, immutable and freely shareable
/// across threads thereafter.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: String,
}

impl RuleSet {
    /// Compile and validate a rule table. A rule without trigger words is a
    /// configuration defect and is rejected here, never at match time.
    pub fn new(specs: Vec<RuleSpec>, fallback: impl Into<String>) -> Result<Self, RuleSetError> {
        let mut rules = Vec::with_capacity(specs.len());
        for (index, spec) in specs.into_iter().enumerate() {
            if spec.trigger_words.is_empty() {
                return Err(RuleSetError::EmptyTriggerWords { index });
            }

            let trigger_count = spec.trigger_words.len();
            let trigger_stems = spec
                .trigger_words
                .iter()
                .map(|word| stem(&word.to_lowercase()))
                .collect::<HashSet<_>>();
            let required_stems = spec
                .required_words
                .iter()
                .map(|word| stem(&word.to_lowercase()))
                .collect();

            rules.push(Rule {
                response: spec.response,
                trigger_stems,
                trigger_count,
                required_stems,
                is_exact: spec.is_exact,
            });
        }

        Ok(Self {
            rules,
            fallback: fallback.into(),
        })
    }

    /// The hand-authored personal-finance table.
    pub fn builtin() -> Self {
        Self::new(builtin_specs(), DEFAULT_FALLBACK).expect("builtin rule table is valid")
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RuleSetError> {
        let doc: RuleDocument = serde_json::from_str(raw)?;
        Self::new(doc.rules, doc.fallback)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RuleSetError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The single external contract: one raw text string in, one response
    /// string out (winner or fallback, never an error).
    pub fn respond(&self, text: &str) -> String {
        self.evaluate(&normalize(text)).reply_text
    }

    pub fn evaluate(&self, tokens: &[String]) -> MatchOutcome {
        matcher::evaluate(&self.rules, &self.fallback, tokens)
    }

    pub fn score_all(&self, tokens: &[String]) -> Vec<RuleScore> {
        matcher::score_all(&self.rules, tokens)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn exact(response: &str, triggers: &[&str]) -> RuleSpec {
    RuleSpec {
        response: response.to_string(),
        trigger_words: triggers.iter().map(ToString::to_string).collect(),
        is_exact: true,
        required_words: Vec::new(),
    }
}

fn gated(response: &str, triggers: &[&str], required: &[&str]) -> RuleSpec {
    RuleSpec {
        response: response.to_string(),
        trigger_words: triggers.iter().map(ToString::to_string).collect(),
        is_exact: false,
        required_words: required.iter().map(ToString::to_string).collect(),
    }
}

/// The builtin personal-finance rule definitions, in registration order.
/// Registration order matters only for the documented tie-break.
pub fn builtin_specs() -> Vec<RuleSpec> {
    vec![
        exact("Hello!", &["hello", "hi", "hey", "sup", "heyo"]),
        exact("See you!", &["bye", "goodbye"]),
        gated(
            "I'm doing fine, and you?",
            &["how", "are", "you", "doing"],
            &["how"],
        ),
        exact("You're welcome!", &["thank", "thanks"]),
        gated(
            "Thank you!",
            &["i", "love", "code", "palace"],
            &["code", "palace"],
        ),
        gated("I'm a bot.", &["who", "are", "you"], &["who"]),
        gated(
            "1. Stocks<br>2. Mutual funds<br>3. FDs<br>4. RDs<br>5. Real estate<br>6. Gold",
            &["best", "ways", "to", "invest"],
            &["invest"],
        ),
        gated(
            "1. Axis Bank Ace Credit Card - Cashback<br>2. SBI Card Elite - Shopping, Travel & Movies<br>3. BPCL SBI Card Octane Credit Card - Fuel<br>4. Flipkart Axis Bank Credit Card - Online Shopping<br>5. Amazon Pay ICICI Credit Card - Online Shopping & Cashback<br>6. InterMiles HDFC Signature Credit Card - Travel<br>7. Axis Bank Vistara Signature Credit Card - Travel<br>8. HDFC Bank Diners Club Privilege Credit Card - Travel & Lifestyle",
            &["credit", "card"],
            &["credit", "card"],
        ),
        gated(
            "Select the Category of Loans :<br>1. Personal Loan<br>2. Home Loan<br>3. Car Loan<br>4. Gold Loan",
            &["select", "loans"],
            &["loans"],
        ),
        gated(
            "1. HDFC (10.5%pa - 21.0%pa)<br>2. ICICI (10.75%pa - 19.0%pa)<br>3. Yes Bank (10.99%pa onwards - 20%pa)<br>4. Axis Bank (10.49%pa - 22%pa)<br>5. State Bank of India (11%pa - 14%pa)",
            &["personal", "loans", "loan"],
            &["personal", "loan"],
        ),
        gated(
            "1. Kotak Mahindra Bank: 8.75%pa onwards<br>2. Bank of Baroda: 9.15%pa onward<br>3. Bank of India: 8.45%pa onwards<br>4. State Bank of India: 9.15%pa onward",
            &["home", "loans", "loan"],
            &["home", "loan"],
        ),
        gated(
            "1. State Bank of India: 8.6%pa onwards<br>2. Canara Bank: 8.8%pa onwards<br>3. HDFC Bank: 9.3%pa onwards<br>4. ICICI Bank: 8.85%pa onwards",
            &["car", "loans", "loan"],
            &["car", "loan"],
        ),
        gated(
            "1. State Bank of India: 8.55%pa onwards<br>2. ICICI Bank: 9%pa onwards<br>3. Manappuram Finance: 12%pa onwards<br>4. Muthoot Finance: 12%pa onwards",
            &["gold", "loans", "loan"],
            &["gold", "loan"],
        ),
        gated(
            "The basic rule of thumb is to divide your monthly after-tax income into three spending categories: 50% for needs, 30% for wants and 20% for savings or paying off debt. By regularly keeping your expenses balanced across these main spending areas, you can put your money to work more efficiently.",
            &["save", "money"],
            &["money", "save"],
        ),
        gated(
            "Start by tracking your expenses and income, then categorize and prioritize your spending. Set realistic goals, monitor your progress, and make adjustments as needed. Consider using budgeting apps or spreadsheets to help you stay organized.",
            &["set", "budget", "budgeting", "stick"],
            &["set", "budget"],
        ),
        gated(
            "1. Take advantage of tax deductions when taking out a home loan.<br>2. Earn tax-exempt interest on savings accounts.<br>3. Receive tax-free interest on NRE accounts.<br>4. Maturity amount from life insurance policies can be tax-free.<br>5. Scholarships for education are exempt from income tax.",
            &["reduce", "paying", "taxes", "tax"],
            &["reduce", "taxes"],
        ),
        gated(
            "Begin by educating yourself about the basics of stock market investing. Open a brokerage account, determine your investment strategy (such as long-term or short-term), and research potential investments. Consider diversifying your portfolio to mitigate risk.",
            &["invest", "stock", "stocks"],
            &["stock", "investing"],
        ),
        gated(
            "Pay bills on time, reduce credit card balances, keep credit utilization low, review credit reports for errors, maintain a long credit history, diversify credit mix, and avoid unnecessary account closures. Seek personalized advice for specific recommendations.",
            &["improve", "credit", "score", "scores"],
            &["score"],
        ),
        gated(
            "Begin by creating a repayment plan, prioritizing higher-interest debts first. Consider debt consolidation or refinancing options if it helps lower interest rates. Make consistent payments, avoid incurring new debts, and explore opportunities to increase your income.",
            &["debt", "manage", "loans"],
            &["debt", "manage"],
        ),
        gated(
            "Investing money in tax-saving instruments<br>Public Provident Fund<br>National Pension Scheme<br>Premium Paid for Life Insurance policy<br>National Savings Certificate",
            &["income", "tax"],
            &["income", "save"],
        ),
        gated(
            "The decision to rent or buy depends on various factors, such as your financial stability, long-term plans, local housing market, and lifestyle preferences. Consider factors like affordability, stability, mobility, and personal goals before making a decision",
            &["rent", "buy", "home"],
            &["rent"],
        ),
        gated(
            "As a salaried employee, before anything, you should understand your tax slab and meaning of your salary breakup components. This will help you figure out how to save on taxes. You need to understand what are the available deductions.<br>1. House Rent Allowance (HRA)<br>2. Leave Travel Allowance (LTA)<br>3. Employee Contribution to Provident Fund (PF)",
            &["taxes", "income", "salary", "tax"],
            &["salary", "tax"],
        ),
        gated(
            "1. Not diversifying your portfolio enough.<br>2. Timing the market instead of focusing on long-term goals.<br>3. Ignoring risk management.<br>4. Overlooking fees and expenses.<br>5. Letting emotions drive investment decisions.",
            &["investment", "mistakes"],
            &["investment", "mistakes"],
        ),
        gated(
            "1. Set clear retirement goals.<br>2. Contribute regularly to retirement accounts such as 401(k)s or IRAs.<br>3. Automate your savings.<br>4. Reduce unnecessary expenses.<br>5. Consider working with a financial advisor to create a retirement plan.",
            &["start", "saving", "retirement"],
            &["start", "saving", "retirement"],
        ),
        gated(
            "1. Reduces risk by spreading investments across different asset classes.<br>2. Enhances potential for long-term returns.<br>3. Helps to hedge against market volatility.<br>4. Provides opportunities for growth in various market conditions.<br>5. Helps to maintain portfolio stability.",
            &["benefits", "diversifying", "investment"],
            &["benefits", "diversifying", "investment"],
        ),
        gated(
            "1. Maintain a diversified portfolio.<br>2. Consider investing in defensive sectors.<br>3. Have a long-term investment horizon.<br>4. Stay informed and avoid panic selling.<br>5. Use options like stop-loss orders to limit losses.",
            &["protect", "investments", "market", "downturns"],
            &["protect", "investments", "market", "downturns"],
        ),
        gated(
            "1. Create a budget and stick to it.<br>2. Prioritize high-interest debt.<br>3. Consider debt consolidation.<br>4. Negotiate lower interest rates.<br>5. Increase your income to pay off debt faster.",
            &["reducing", "debt", "strategies"],
            &["reducing", "reduce", "debt", "strategies"],
        ),
        gated(
            "1. Pay bills on time.<br>2. Keep credit card balances low.<br>3. Monitor your credit report regularly.<br>4. Avoid opening too many new accounts.<br>5. Maintain a mix of credit types.",
            &["improve", "credit", "score"],
            &["improve", "credit", "score"],
        ),
        gated(
            "1. Risk of losing your home if you can’t repay the loan.<br>2. Possible reduction in home equity.<br>3. Higher interest rates compared to traditional mortgages.<br>4. Impact on your credit score if you default.<br>5. Fees and closing costs associated with the loan.",
            &["risks", "borrowing", "home", "equity"],
            &["risks", "borrowing", "home", "equity"],
        ),
        gated(
            "1. Research current interest rates.<br>2. Improve your credit score.<br>3. Shop around and compare offers.<br>4. Highlight your creditworthiness to lenders.<br>5. Consider refinancing or consolidating existing loans.",
            &["negotiate", "lower", "interest", "rate"],
            &["negotiate", "lower", "interest", "rate"],
        ),
        gated(
            "1. Take advantage of business expenses such as office supplies and equipment.<br>2. Deduct qualified business meals and entertainment expenses.<br>3. Contribute to retirement accounts like SEP IRAs or Solo 401(k)s.<br>4. Claim the home office deduction if applicable.<br>5. Work with a tax professional to identify all available deductions.",
            &["maximize", "tax", "deductions", "small", "business", "owner"],
            &["maximize", "tax", "deductions", "small", "business", "owner"],
        ),
        gated(
            "1. Tax treatment: Contributions to traditional IRAs may be tax-deductible, while Roth IRA contributions are made with after-tax dollars.<br>2. Withdrawals: Traditional IRA withdrawals are generally taxed as ordinary income, while qualified Roth IRA withdrawals are tax-free.<br>3. Age restrictions: Traditional IRAs have required minimum distributions (RMDs) starting at age 72, while Roth IRAs do not have RMDs during the owner’s lifetime.",
            &["differences", "traditional", "roth", "iras"],
            &["differences", "traditional", "roth", "iras"],
        ),
        gated(
            "As a salaried employee, before anything, you should understand your tax slab and the meaning of your salary breakup components. This will help you figure out how to save on taxes. You need to understand what are the available deductions.",
            &["tax", "reduction", "employee"],
            &["tax", "reduction", "employee"],
        ),
        gated(
            "Research various loan options and compare interest rates and terms. Consider factors such as repayment flexibility, prepayment penalties, and customer service reputation when choosing a lender.",
            &["loan", "research", "interest", "rate"],
            &["loan", "research", "interest", "rate"],
        ),
        gated(
            "Prioritize higher-interest debts first when creating a repayment plan. Explore debt consolidation or refinancing options to lower interest rates. Make consistent payments and avoid incurring new debts.",
            &["loan", "repayment", "consolidation"],
            &["loan", "repayment", "consolidation"],
        ),
        gated(
            "Understand the risks associated with borrowing, including the possibility of losing your home if you can’t repay the loan, reduction in home equity, higher interest rates compared to traditional mortgages, impact on your credit score if you default, and fees and closing costs associated with the loan.",
            &["loan", "risks", "borrowing"],
            &["loan", "risks", "borrowing"],
        ),
        gated(
            "Choose credit cards that align with your spending habits and financial goals. Consider factors such as annual fees, rewards programs, interest rates, and customer service quality when selecting a credit card.",
            &["credit", "card", "choose"],
            &["credit", "card", "choose"],
        ),
        gated(
            "Use credit cards responsibly by paying bills on time, keeping credit card balances low, monitoring your credit report regularly, avoiding opening too many new accounts, and maintaining a mix of credit types.",
            &["credit", "card", "responsibly"],
            &["credit", "card", "responsibly"],
        ),
        gated(
            "If you're considering a credit card, compare various options available in the market. Look for benefits such as cashback, rewards points, low interest rates, and additional perks like travel insurance or airport lounge access.",
            &["credit", "card", "compare"],
            &["credit", "card", "compare"],
        ),
        gated(
            "As an Indian citizen, you can utilize various tax-saving options to reduce your tax liability. Some effective tax-saving hacks include:<br>1. Invest in tax-saving instruments like Public Provident Fund (PPF), National Pension Scheme (NPS), Equity Linked Saving Schemes (ELSS), and Sukanya Samriddhi Yojana (SSY).<br>2. Utilize deductions under Section 80C for investments in Employee Provident Fund (EPF), Life Insurance Premiums, and Equity Linked Saving Schemes (ELSS).<br>3. Maximize deductions under Section 80D for health insurance premiums for self, family, and parents.<br>4. Take advantage of deductions under Section 80TTA for interest earned on savings accounts.<br>5. Utilize deductions under Section 80G for donations made to eligible charities and institutions.",
            &["tax", "saving", "tips", "india"],
            &["tax", "saving", "tips", "india"],
        ),
        gated(
            "In India, there are various loan options available to meet different financial needs:<br>1. Personal Loan: Used for various purposes such as wedding expenses, medical emergencies, or travel.<br>2. Home Loan: To purchase or construct a house or apartment.<br>3. Car Loan: To purchase a new or used car.<br>4. Education Loan: For higher education expenses, both in India and abroad.<br>5. Business Loan: For starting or expanding a business venture.<br>Ensure to compare interest rates, processing fees, and repayment terms before choosing a loan option.",
            &["loan", "options", "india"],
            &["loan", "options", "india"],
        ),
        gated(
            "Effective budgeting is crucial for managing finances efficiently. Here are some budgeting tips for Indian citizens:<br>1. Track your expenses using apps like Walnut, Money Manager, or YNAB (You Need a Budget).<br>2. Categorize expenses into fixed (rent, utilities) and variable (dining out, entertainment).<br>3. Prioritize essential expenses like groceries, rent, and utility bills.<br>4. Allocate a portion of your income for savings and investments.<br>5. Review your budget regularly and make adjustments as needed to meet financial goals.",
            &["budgeting", "tips", "india"],
            &["budgeting", "tips", "india"],
        ),
        gated(
            "Mutual funds are popular investment options in India, offering diversification and professional management. Consider investing in mutual funds based on your investment goals, risk tolerance, and investment horizon. Some popular mutual fund categories in India include:<br>1. Equity Funds: Invest primarily in stocks, suitable for long-term wealth creation.<br>2. Debt Funds: Invest in fixed-income securities like bonds and government securities, providing stable returns with lower risk.<br>3. Hybrid Funds: Invest in a mix of equity and debt instruments, offering a balance of risk and returns.<br>4. Index Funds: Track benchmark indices like Nifty or Sensex, providing returns similar to the underlying index.<br>5. Tax-Saving Funds (ELSS): Offer tax benefits under Section 80C of the Income Tax Act, with a lock-in period of three years.",
            &["mutual", "funds", "india"],
            &["mutual", "funds", "india"],
        ),
        gated(
            "Gold is considered a traditional investment option in India, offering stability and hedging against inflation. Indian citizens can invest in gold through various avenues:<br>1. Physical Gold: Purchase gold jewelry, coins, or bars from jewelers or banks.<br>2. Gold ETFs (Exchange-Traded Funds): Invest in gold electronically through stock exchanges like NSE or BSE.<br>3. Gold Sovereign Bonds: Invest in government-backed gold bonds issued by RBI, offering interest and capital appreciation.<br>4. Gold Mutual Funds: Invest in mutual funds that invest in gold-related assets, providing diversification and professional management.<br>5. Gold Savings Schemes: Participate in gold savings schemes offered by jewelers or banks, allowing systematic investment in gold over time.",
            &["gold", "investment", "india"],
            &["gold", "investment", "india"],
        ),
        gated(
            "Real estate is a popular investment avenue in India, offering potential for capital appreciation and rental income. Indian citizens can invest in real estate through various options:<br>1. Residential Properties: Purchase apartments, villas, or plots for personal use or rental income.<br>2. Commercial Properties: Invest in office spaces, retail outlets, or warehouses for rental income and capital appreciation.<br>3. REITs (Real Estate Investment Trusts): Invest in REITs listed on stock exchanges, providing exposure to real estate assets and regular dividends.<br>4. Real Estate Crowdfunding: Participate in real estate projects through online crowdfunding platforms, pooling funds with other investors.<br>5. Real Estate Funds: Invest in real estate funds managed by asset management companies, offering professional management and diversification across properties.",
            &["real", "estate", "india"],
            &["real", "estate", "india"],
        ),
        gated(
            "Retirement planning is essential for Indian citizens to ensure financial security during their golden years. Here are some retirement planning tips:<br>1. Start Early: Begin investing for retirement as early as possible to benefit from the power of compounding.<br>2. Utilize Provident Funds: Contribute to EPF (Employee Provident Fund) and PPF (Public Provident Fund) for tax benefits and retirement savings.<br>3. Invest in NPS: Open an NPS (National Pension System) account for long-term retirement savings with flexibility and tax benefits.<br>4. Consider Annuity Plans: Purchase annuity plans from insurance companies to receive regular income post-retirement.<br>5. Review and Adjust: Regularly review your retirement plan, adjusting contributions and investments based on changing financial goals and market conditions.",
            &["retirement", "planning", "india"],
            &["retirement", "planning", "india"],
        ),
        gated(
            "Maximize your tax savings with these smart strategies:<br>1. Utilize Section 80C Deductions: Invest in tax-saving instruments like PPF, ELSS, NSC, and EPF to claim deductions up to ₹1.5 lakh.<br>2. Opt for NPS Contributions: Contribute to NPS (National Pension System) and claim an additional deduction of up to ₹50,000 under Section 80CCD(1B).<br>3. Claim HRA Exemption: If you're a salaried individual, claim HRA (House Rent Allowance) exemption based on your rent payments, HRA received, and place of residence.<br>4. Utilize Home Loan Benefits: Avail deductions on home loan repayments under Sections 24(b) and 80C for interest and principal repayments, respectively.<br>5. Invest in Health Insurance: Purchase health insurance for yourself, your family, and your parents to claim deductions under Section 80D.<br>6. Opt for LTA Exemption: Utilize Leave Travel Allowance (LTA) for domestic travel expenses and claim exemptions under Section 10(5).<br>7. Consider Education Loan Interest: Claim deductions on interest paid for education loans under Section 80E for yourself, spouse, or children's higher education.<br>8. Invest in Tax-Free Bonds: Consider investing in tax-free bonds issued by government entities like NHAI or REC for tax-free interest income.<br>9. Maximize EPF Contributions: Increase your EPF (Employee Provident Fund) contributions to maximize tax savings and retirement corpus.<br>10. Consult a Tax Advisor: Seek professional advice from a tax consultant or financial planner to optimize your tax-saving strategies and ensure compliance with tax laws.",
            &["tax", "saving", "hacks", "india"],
            &["tax", "saving", "india"],
        ),
        gated(
            "Here are more strategies to maximize your tax savings in India:<br>11. Utilize Section 80DDB: Claim deductions for medical treatment of specified diseases for yourself or dependents under Section 80DDB.<br>12. Invest in Sukanya Samriddhi Yojana: Secure your daughter's future by investing in the Sukanya Samriddhi Yojana and avail deductions under Section 80C.<br>13. Deduct Professional Tax: Deduct professional tax paid during the financial year from your taxable income.<br>14. Use Section 80G: Contribute to approved charitable institutions and claim deductions under Section 80G for the donated amount.<br>15. Opt for Section 80TTA: Earn interest income from savings accounts and claim deductions up to ₹10,000 under Section 80TTA.<br>16. Invest in RGESS: Benefit from tax deductions under the Rajiv Gandhi Equity Savings Scheme (RGESS) for first-time equity investors.<br>17. Claim LTA for Family: Utilize LTA exemptions for family members, including spouse, children, and dependent parents, on travel expenses.<br>18. Explore Section 80U: If you have a disability, claim deductions under Section 80U for yourself or a dependent family member.<br>19. Consider Section 10(14): Enjoy tax-free perks like food coupons, medical reimbursement, and transport allowance provided by your employer.<br>20. Utilize Section 80GGA: Claim deductions for donations made to scientific research or rural development under Section 80GGA of the Income Tax Act.",
            &["tax", "saving", "hacks", "india", "additional"],
            &["tax", "saving", "hacks", "india"],
        ),
        gated(
            "If I were you, I would go to the internet and type exactly what you wrote there!",
            &["give", "advice"],
            &["advice"],
        ),
        gated(
            "I don't like eating anything because I'm a bot obviously!",
            &["what", "you", "eat"],
            &["you", "eat"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_compiles() {
        let rules = RuleSet::builtin();
        assert!(rules.len() > 40);
        assert_eq!(rules.fallback(), DEFAULT_FALLBACK);
    }

    #[test]
    fn rejects_rule_without_trigger_words() {
        let specs = vec![RuleSpec {
            response: "broken".to_string(),
            trigger_words: Vec::new(),
            is_exact: false,
            required_words: Vec::new(),
        }];

        let err = RuleSet::new(specs, DEFAULT_FALLBACK).unwrap_err();
        assert!(matches!(err, RuleSetError::EmptyTriggerWords { index: 0 }));
    }

    #[test]
    fn trigger_vocabulary_is_stemmed_at_construction() {
        let rules = RuleSet::new(
            vec![gated("ok", &["stocks", "Investing"], &["Stocks"])],
            DEFAULT_FALLBACK,
        )
        .expect("table is valid");

        let rule = &rules.rules()[0];
        assert!(rule.trigger_stems.contains("stock"));
        assert!(rule.trigger_stems.contains("invest"));
        assert_eq!(rule.required_stems, vec!["stock".to_string()]);
        assert_eq!(rule.trigger_count, 2);
    }

    #[test]
    fn loads_an_external_json_table() {
        let raw = r#"{
            "fallback": "No idea.",
            "rules": [
                {
                    "response": "Pong!",
                    "trigger_words": ["ping"],
                    "is_exact": true
                }
            ]
        }"#;

        let rules = RuleSet::from_json_str(raw).expect("document parses");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.respond("ping"), "Pong!");
        assert_eq!(rules.respond("pong"), "No idea.");
    }

    #[test]
    fn responds_identically_on_repeated_calls() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.respond("hello"), rules.respond("hello"));
    }
}
