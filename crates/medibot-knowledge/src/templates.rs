//! Canned MediBot messages.
//!
//! Slots use `{name}` syntax and are filled by the chat crate's renderer:
//! `{disease}`, `{confidence}`, `{confidenceLevel}`, `{accuracy}`.

pub const BOT_NAME: &str = "MediBot";

/// Model accuracy quoted in the accuracy answer. Not derived from the
/// prediction at hand.
pub const DEFAULT_ACCURACY_RANGE: &str = "88-95";

pub const GREETINGS: [&str; 3] = [
    "👋 Hi there! I'm MediBot. I'm here to help you understand your prediction results. What would you like to know?",
    "Hello! 👋 I can explain your test results, answer questions about accuracy, and provide guidance. How can I assist you?",
    "Welcome! 👋 I'm MediBot, your AI assistant. Feel free to ask me anything about your prediction!",
];

pub const MEANING: &str = "The predicted class '{disease}' indicates that the model has identified visual characteristics consistent with {disease}. With a confidence score of {confidence}%, the system is {confidenceLevel} in this assessment.";

pub const ACCURACY: &str = "The accuracy of our model depends on several factors:\n\
✓ Image Quality: Clear, well-lit images produce more reliable results\n\
✓ Image Angle: Multiple angles improve accuracy\n\
✓ Lighting: Natural or even lighting is ideal\n\
✓ Cleanliness: Clean skin surface without obstruction\n\n\
Our model typically achieves {accuracy}% accuracy on properly captured images.";

pub const TRUST: &str = "You should consider these factors when trusting results:\n\
⚠️ This is AI analysis, not professional diagnosis\n\
✓ Results are based on visual patterns only\n\
✓ Professional medical consultation is essential\n\
✓ Use this as a supportive tool, not a definitive diagnosis\n\n\
Always consult a healthcare provider for final diagnosis.";

pub const IMPROVEMENT: &str = "To get better predictions, follow these guidelines:\n\
📸 Image Quality: Use a high-resolution camera\n\
💡 Lighting: Use natural daylight or bright indoor lighting\n\
📐 Angle: Capture the affected area straight-on\n\
🧼 Cleanliness: Ensure the skin is clean and dry\n\
🎯 Focus: Make sure the affected area is the main subject\n\n\
These factors significantly impact prediction accuracy.";

pub const DISCLAIMER: &str = "⚠️ Important Disclaimer:\n\
• This tool uses AI image analysis only\n\
• It is NOT a medical diagnosis\n\
• Results should NOT replace professional medical advice\n\
• Always consult a qualified healthcare professional\n\
• Use this system as a supplementary tool, not a definitive diagnosis\n\n\
Your health is important—seek professional guidance!";

pub const UNKNOWN_GUIDANCE: &str =
    "I don't have specific guidance for {disease}. Please consult a healthcare professional.";

pub const DEFAULT_RESPONSES: [&str; 3] = [
    "I'm here to help! I can explain the prediction of {disease}, discuss accuracy, provide guidance for better images, or share important disclaimers. What would you like to know?",
    "That's a great question! Here's what I can help with:\n\
✓ Explain what {disease} means\n\
✓ Discuss prediction accuracy and reliability\n\
✓ Provide tips for better predictions\n\
✓ Share important medical disclaimers\n\n\
What interests you most?",
    "I understand! While I'm specialized in explaining this prediction, I'd be happy to help with any of these:\n\
• Meaning of the results\n\
• Prediction accuracy\n\
• How to get better predictions\n\
• Important disclaimers\n\n\
Which would be most helpful?",
];

pub const FOLLOW_UP_PROMPTS: [&str; 4] = [
    "Would you like to know more about improving prediction accuracy?",
    "Do you have any other questions about your results?",
    "Would you like guidance on how to capture better images?",
    "Can I help explain anything else about your prediction?",
];

pub const NO_PREDICTION: &str =
    "Please make a prediction first, and then I can help explain the results!";

pub const EXPLANATION_HEADER: &str = "Great! I've analyzed the prediction:";

pub const LOW_CONFIDENCE_INTRO: &str = "⚠️ Because confidence is low, I strongly recommend:";

pub const LOW_CONFIDENCE_ADVICE: [&str; 3] = [
    "Retaking the image with better lighting",
    "Consulting a healthcare professional",
    "Not relying solely on this result",
];

pub const EXPLANATION_CLOSING: &str =
    "Would you like to know more about what this means or how to improve future predictions?";

/// Footer printed under every result and report.
pub const RESULT_NOTE: &str = "This prediction is based on image analysis. Please consult with a healthcare professional for proper diagnosis and treatment. This tool is for informational purposes only and should not replace professional medical advice.";
