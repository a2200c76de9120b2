// ============================================================================
// Code-generation prompt templates
//
// Template selection is static configuration: one template kind is chosen at
// startup and used for every pipeline in the run. Each kind knows the file
// extension of the artifact it produces and the fence tag its instructions
// are expected to elicit from the model.
// ============================================================================

/// Which code-generation template drives the completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Java Selenium TestNG test, self-contained utilities
    SeleniumJava,

    /// Java Selenium TestNG test that must call into the pre-existing
    /// SmaClickUtilities / SmaSendKeyUtilites helpers
    SeleniumJavaUtilities,

    /// TypeScript Playwright spec
    PlaywrightTs,
}

impl TemplateKind {
    /// Parse a template name from CLI/config. Unknown names fall back to the
    /// standard Java template.
    pub fn from_name(name: &str) -> Self {
        match name {
            "java-utilities" => TemplateKind::SeleniumJavaUtilities,
            "playwright" => TemplateKind::PlaywrightTs,
            _ => TemplateKind::SeleniumJava,
        }
    }

    /// Extension of the generated artifact file, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::SeleniumJava | TemplateKind::SeleniumJavaUtilities => ".java",
            TemplateKind::PlaywrightTs => ".spec.ts",
        }
    }

    /// Fence language tag the template instructs the model to use.
    pub fn fence_language(&self) -> &'static str {
        match self {
            TemplateKind::SeleniumJava | TemplateKind::SeleniumJavaUtilities => "java",
            TemplateKind::PlaywrightTs => "typescript",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            TemplateKind::SeleniumJava => STANDARD_JAVA_TEMPLATE,
            TemplateKind::SeleniumJavaUtilities => UTILITIES_JAVA_TEMPLATE,
            TemplateKind::PlaywrightTs => PLAYWRIGHT_TEMPLATE,
        }
    }

    /// Render the template, substituting the derived class name, the
    /// pretty-printed trace JSON, and the test steps as a bulleted list.
    pub fn render(&self, class_name: &str, trace_json: &str, steps: &[String]) -> String {
        let bullets = steps
            .iter()
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n");

        self.template()
            .replace("{class_name}", class_name)
            .replace("{test_data_json}", trace_json)
            .replace("{test_case_steps}", &bullets)
    }
}

// ============================================================================
// Template texts
// ============================================================================

const STANDARD_JAVA_TEMPLATE: &str = r#"Generate a single complete Java file named `{class_name}.java` implementing a Selenium TestNG test based on this JSON test data:

{test_data_json}

Requirements:

1. Smart & Reliable Element Locator Methods:
   - Create a dedicated ElementFinder utility class with specialized locator methods in this priority:
     findElementByXpath, findElementById, findElementByCssSelector, findElementByName,
     findElementByLinkText, findElementByPartialLinkText, findElementByCustomStrategy(Map<String, String> attributes)
   - Each method must use WebDriverWait with custom timeout + ExpectedConditions, log the
     locator strategy, fall back through the selector priority, and throw
     ElementNotFoundException with detailed context if nothing matches. Handle
     StaleElementReferenceException and the other common Selenium exceptions.

2. Comprehensive Screenshot System:
   - captureScreenshotOnStep(String stepName), captureScreenshotOnFailure(String methodName, Throwable error),
     captureFullPageScreenshot(), captureElementScreenshot(WebElement element, String elementName)
   - Structured folders by test class/date/run, unique timestamped filenames, automatic
     directory creation, screenshots attached to test reports.

3. Advanced WebDriver Configuration:
   - WebDriverManager with browser version control, cross-browser support (Chrome, Firefox, Edge),
     custom ChromeOptions/FirefoxOptions, window size presets, cookie and cache management
     between tests, manual captcha intervention handling with wait.

4. Comprehensive Modal & Overlay Handling:
   - Multi-strategy popup dismissal: close-button detection by common attributes, Escape key
     simulation, overlay click-away, wait for animation completion. iFrame context switching
     and a cookie consent handler.

5. Enterprise-Grade Resilience:
   - Custom TestNG RetryAnalyzer with configurable attempts, conditional waits with
     progressive timeouts, element staleness detection and refresh.

6. Advanced Logging & Reporting:
   - SLF4J with custom MDC context, structured JSON logging, test context enrichment,
     element interaction history.

7. Enhanced Page Object Architecture:
   - BasePage with common interactions, fluent interface pattern, lazy element
     initialization, page transition handling.

8. Comprehensive Assertions Framework:
   - Element presence/visibility assertions, content validation (text, attributes, CSS),
     state verification, soft assertions for multiple checks, custom assertion messages
     with context.

Use "interacted elements" xpaths. For elements where "interacted_element" is null, use
appropriate locator strategies based on other data in the given JSON.
Do not add any explanation, just give me the java code

Test Case Steps:
{test_case_steps}
"#;

const UTILITIES_JAVA_TEMPLATE: &str = r#"Generate a single complete Java file named `{class_name}.java` implementing a Selenium TestNG test based on this JSON test data:

{test_data_json}

## Important Instructions:
### Mandatory Usage of Utility Methods
Do not add any explanation, just give me the java code
Instead of 'element.click' always use clickWebElementForTpath(By locator)
Instead of 'element.sendKeys(value)' always use sendKeysElementTPath(By locator, boolean clearInput, String value)

**DO NOT define `clickWebElementForTpath` and `sendKeysElementTPath`. These are already
implemented in `SmaClickUtilities` and `SmaSendKeyUtilites`. Simply import and use them in
the click and sendKey events. If you redefine these methods, the implementation will be
considered incorrect.**

### Required Imports (ensure this is in the file)
```java
import static SmaClickUtilities.clickWebElementForTpath;
import static SmaSendKeyUtilites.sendKeysElementTPath;
```

DO NOT use element.click() or element.sendKeys() directly. Replace them with the
corresponding method calls from SmaClickUtilities and SmaSendKeyUtilites.

Follow the same locator, screenshot, resilience, logging, page-object, and assertion
requirements as the standard template, with WebDriverWait-backed element lookup and a
custom TestNG RetryAnalyzer.

IMPORTANT: When using element locators from the JSON data:
1. ALWAYS use the EXACT xpath values from the "interacted_element" fields in the JSON
2. For any element with an "interacted_element" value, extract the full xpath from the
   "xpath" field in that object
3. DO NOT simplify, modify, or create alternative XPaths; use the complete paths exactly
   as provided
4. For elements where "interacted_element" is null, use appropriate locator strategies
   based on context

Test Case Steps Implementation:
{test_case_steps}
"#;

const PLAYWRIGHT_TEMPLATE: &str = r#"Generate a single complete TypeScript file named {class_name}.spec.ts implementing a Playwright test based on this JSON test data:

{test_data_json}

## Important Instructions:
### Mandatory Usage of Utility Methods
Do not add any explanation, just give me the TypeScript code
Instead of 'element.click()' always use clickElement(page, locator)
Instead of 'page.fill()' always use fillElement(page, locator, value, clearInput)

**DO NOT define `clickElement` and `fillElement`. These are already implemented in
`PageElementUtils`. Simply import and use them in the click and fill events. If you
redefine these methods, the implementation will be considered incorrect.**

### Required Imports (ensure this is in the file)
```typescript
import { test, expect } from '@playwright/test';
import { clickElement, fillElement } from './PageElementUtils';
```

DO NOT use page.click() or page.fill() directly.

Requirements:
1. ElementFinder utility with locator methods in priority order: findElementById,
   findElementByTestId, findElementByXPath, findElementByCSS, findElementByText,
   findElementByRole, findElementByCustomStrategy. Each uses page.waitForSelector with
   custom timeout, logs its strategy, falls back through the priority list, and fails
   with a detailed error message.
2. Screenshot system: captureScreenshot(page, stepName), captureScreenshotOnFailure,
   captureFullPageScreenshot, captureElementScreenshot; structured folders, timestamped
   filenames, automatic directory creation.
3. Browser configuration: cross-browser projects (Chromium, Firefox, WebKit), viewport
   presets, storage state management between tests, network request interception.
4. Modal & overlay handling: close-button detection, Escape key simulation, overlay
   click-away, cookie consent handler, frame context switching.
5. Resilience: configurable retry logic, conditional waits with progressive timeouts,
   element staleness detection and retry.
6. Logging: structured logging with test context, element interaction history.
7. Page object architecture: BasePage with common interactions, fluent chaining, lazy
   element initialization, page transition handling.
8. Assertions: element presence/visibility, content validation, state verification, soft
   assertions, custom assertion messages with context.

IMPORTANT: When using element locators from the JSON data:
ALWAYS use the EXACT selector values from the "interacted_element" fields in the JSON.
DO NOT simplify, modify, or create alternative selectors. For elements where
"interacted_element" is null, use appropriate locator strategies based on context.

Test Case Steps Implementation:
{test_case_steps}
"#;
